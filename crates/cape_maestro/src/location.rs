//! Location adapters.

use cape_carton::String;

/// Source of the current fragment.
///
/// Fragments are slash-delimited without a leading slash; the empty string
/// is the root.
pub trait Location {
    /// Get the current fragment.
    fn fragment(&self) -> String;

    /// Replace the current fragment.
    fn set_fragment(&mut self, fragment: &str);
}

/// In-process location holding only the current fragment.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    fragment: String,
}

impl MemoryLocation {
    /// Create a location starting at `fragment`.
    pub fn new(fragment: &str) -> Self {
        Self {
            fragment: String::from(fragment),
        }
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = String::from(fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_location_replaces_fragment() {
        let mut location = MemoryLocation::default();
        assert_eq!(location.fragment(), "");

        for id in 0..1000 {
            location.set_fragment(&format!("members/{}", id));
        }
        assert_eq!(location.fragment(), "members/999");
        assert_eq!(MemoryLocation::new("top").fragment(), "top");
    }
}
