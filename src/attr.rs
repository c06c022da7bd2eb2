//! Text attribute bitset.

bitflags::bitflags! {
    /// Text attributes carried by a resolved style.
    ///
    /// These map directly to SGR parameters. Combine with bitwise OR:
    ///
    /// ```
    /// use undertone::Attr;
    ///
    /// let attrs = Attr::BOLD | Attr::REVERSE;
    /// assert!(attrs.contains(Attr::BOLD));
    /// assert!(!attrs.contains(Attr::DIM));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 — increased intensity.
        const BOLD      = 1 << 0;
        /// SGR 4 — underlined.
        const UNDERLINE = 1 << 1;
        /// SGR 2 — decreased intensity (faint).
        const DIM       = 1 << 2;
        /// SGR 7 — swap foreground and background.
        const REVERSE   = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_empty_by_default() {
        assert_eq!(Attr::default(), Attr::empty());
    }

    #[test]
    fn test_attr_combine() {
        let attrs = Attr::BOLD | Attr::UNDERLINE | Attr::REVERSE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(attrs.contains(Attr::UNDERLINE));
        assert!(attrs.contains(Attr::REVERSE));
        assert!(!attrs.contains(Attr::DIM));
    }
}
