//! The ordered output of a traversal.

use core::fmt;

/// Node identifiers in the order a traversal visited them.
///
/// Displays as the identifiers joined with `" -> "`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ScanResult {
    order: Vec<String>,
}

impl ScanResult {
    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The first visited node, which is always the start node.
    pub fn first(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    /// Position of `node` in visitation order.
    pub fn position(&self, node: &str) -> Option<usize> {
        self.order.iter().position(|n| n == node)
    }

    /// Returns `true` if `node` was visited.
    pub fn contains(&self, node: &str) -> bool {
        self.position(node).is_some()
    }

    /// Iterates over visited identifiers in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Borrowed view of the order, handy for comparisons against literals.
    pub fn as_strs(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// Consumes the result, returning the owned identifiers.
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl<'a> FromIterator<&'a str> for ScanResult {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self {
            order: iter.into_iter().map(str::to_owned).collect(),
        }
    }
}

impl IntoIterator for ScanResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes = self.order.iter();
        if let Some(first) = nodes.next() {
            f.write_str(first)?;
            for node in nodes {
                write!(f, " -> {node}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_with_arrows() {
        let scan: ScanResult = ["A", "B", "C"].into_iter().collect();
        assert_eq!(scan.to_string(), "A -> B -> C");
        assert_eq!(ScanResult::default().to_string(), "");
    }

    #[test]
    fn lookups() {
        let scan: ScanResult = ["F", "D"].into_iter().collect();
        assert_eq!(scan.first(), Some("F"));
        assert_eq!(scan.position("D"), Some(1));
        assert!(!scan.contains("A"));
        assert_eq!(scan.into_vec(), vec!["F".to_owned(), "D".to_owned()]);
    }
}
