use crate::QualifiedName;
use quote::ToTokens;
use std::fmt::{self, Display};
use syn::{GenericArgument, PathArguments, TypePath};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Boolean,
    Integer,
    Floating,
}

/// The closed set of field-type shapes the generator understands. A `Record`
/// refers to another declaration and is resolved lazily through the registry;
/// anything unrecognized is carried as `Opaque` for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Text,
    Sequence(Box<TypeDescriptor>),
    Mapping(Box<TypeDescriptor>, Box<TypeDescriptor>),
    Record(QualifiedName),
    Opaque(String),
}

impl TypeDescriptor {
    pub fn boolean() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Boolean)
    }

    pub fn integer() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Integer)
    }

    pub fn floating() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Floating)
    }

    pub fn text() -> Self {
        TypeDescriptor::Text
    }

    pub fn sequence(element: TypeDescriptor) -> Self {
        TypeDescriptor::Sequence(Box::new(element))
    }

    pub fn mapping(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Mapping(Box::new(key), Box::new(value))
    }

    pub fn record(name: QualifiedName) -> Self {
        TypeDescriptor::Record(name)
    }

    pub fn opaque(spelling: impl Into<String>) -> Self {
        TypeDescriptor::Opaque(spelling.into())
    }

    /// Maps a Rust type spelling onto a descriptor, for front ends that hand
    /// over textual field types. Anything that does not parse, or parses to a
    /// shape outside the closed set, comes back as `Opaque`.
    pub fn parse(spelling: &str) -> Self {
        match syn::parse_str::<syn::Type>(spelling) {
            Ok(ty) => Self::from_syn(&ty),
            Err(_) => TypeDescriptor::Opaque(spelling.to_owned()),
        }
    }

    fn from_syn(ty: &syn::Type) -> Self {
        let syn::Type::Path(TypePath { qself: None, path }) = ty else {
            return TypeDescriptor::Opaque(ty.to_token_stream().to_string());
        };
        let Some(last) = path.segments.last() else {
            return TypeDescriptor::Opaque(ty.to_token_stream().to_string());
        };
        match &last.arguments {
            PathArguments::None => match last.ident.to_string().as_str() {
                "bool" => TypeDescriptor::boolean(),
                "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" => TypeDescriptor::integer(),
                "f32" | "f64" => TypeDescriptor::floating(),
                "String" | "str" => TypeDescriptor::Text,
                // Wider than the wire integer; no lossless mapping exists.
                "u64" | "u128" | "i128" | "usize" | "isize" => {
                    TypeDescriptor::Opaque(ty.to_token_stream().to_string())
                }
                _ => TypeDescriptor::Record(QualifiedName::new(
                    path.segments.iter().map(|segment| segment.ident.to_string()),
                )),
            },
            PathArguments::AngleBracketed(args) => {
                let mut inner = args.args.iter().filter_map(|arg| match arg {
                    GenericArgument::Type(ty) => Some(Self::from_syn(ty)),
                    _ => None,
                });
                match (last.ident.to_string().as_str(), inner.next(), inner.next()) {
                    ("Vec", Some(element), None) => TypeDescriptor::sequence(element),
                    ("BTreeMap" | "HashMap", Some(key), Some(value)) => {
                        TypeDescriptor::mapping(key, value)
                    }
                    _ => TypeDescriptor::Opaque(ty.to_token_stream().to_string()),
                }
            }
            PathArguments::Parenthesized(_) => {
                TypeDescriptor::Opaque(ty.to_token_stream().to_string())
            }
        }
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(PrimitiveKind::Boolean) => f.write_str("boolean"),
            TypeDescriptor::Primitive(PrimitiveKind::Integer) => f.write_str("integer"),
            TypeDescriptor::Primitive(PrimitiveKind::Floating) => f.write_str("floating"),
            TypeDescriptor::Text => f.write_str("text"),
            TypeDescriptor::Sequence(element) => write!(f, "sequence<{}>", element),
            TypeDescriptor::Mapping(key, value) => write!(f, "mapping<{}, {}>", key, value),
            TypeDescriptor::Record(name) => Display::fmt(name, f),
            TypeDescriptor::Opaque(spelling) => f.write_str(spelling),
        }
    }
}
