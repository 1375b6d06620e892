use crate::RecordDeclaration;

pub(crate) trait Push {
    type Element: TypedIndex;
    fn index_push(&mut self, element: Self::Element) -> <Self::Element as TypedIndex>::Index;
}

impl<T> Push for Vec<T>
where
    T: TypedIndex,
{
    type Element = T;

    fn index_push(&mut self, element: T) -> T::Index {
        self.push(element);
        T::index(self.len() - 1)
    }
}

pub(crate) trait TypedIndex {
    type Index;
    fn index(i: usize) -> Self::Index;
}

/// Arena handle for a registered declaration.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub(crate) struct DeclRef(pub usize);

impl TypedIndex for RecordDeclaration {
    type Index = DeclRef;

    fn index(i: usize) -> Self::Index {
        DeclRef(i)
    }
}
