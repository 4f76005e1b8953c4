use std::{convert::Infallible, fmt, str::FromStr};

/// A dot-separated path through a document, split into element names.
///
/// Empty segments are dropped, so leading, trailing and doubled dots are
/// ignored. Segments are matched literally; there are no wildcards,
/// indices or predicates.
///
/// # Examples
///
/// ```
/// use xml_query::Path;
///
/// let path = Path::parse("OrderViewRS.Orders..Order.");
/// assert_eq!(path.segments(), ["OrderViewRS", "Orders", "Order"]);
/// assert_eq!(path.to_string(), "OrderViewRS.Orders.Order");
///
/// assert!(Path::parse("...").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn parse(path: &str) -> Self {
        Path {
            segments: path
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// An empty path addresses the root itself
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
