use std::fmt::{self, Display};

/// Globally unique identifier of a record declaration: the namespace path
/// followed by the local name, e.g. `app::model::Person`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        assert!(!segments.is_empty(), "QualifiedName::new: empty name");
        QualifiedName { segments }
    }

    /// Parses a `::`-separated path.
    pub fn parse(path: &str) -> Self {
        QualifiedName::new(path.split("::").map(str::trim))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The local name, without the namespace path.
    pub fn local(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn namespace(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("::")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl From<&str> for QualifiedName {
    fn from(path: &str) -> Self {
        QualifiedName::parse(path)
    }
}
