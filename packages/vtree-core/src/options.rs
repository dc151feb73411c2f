/// Knobs that control how a tree is walked into markup.
///
/// `Options` is cheap to construct and is threaded through the whole walk by
/// reference; it never changes mid-render.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Render only the component at the root and stop: descendants of the
    /// root are not walked at all (the root's own children, if it is a
    /// plain element, still are).
    pub shallow: bool,

    /// Like `shallow`, but only takes effect for components whose
    /// `display_name` starts with an uppercase letter followed by another
    /// uppercase letter or a dot (the conventional marker for higher-order
    /// components, e.g. `Connect(Foo)`). Has no effect unless `shallow` is
    /// also set.
    pub shallow_high_order: bool,

    /// Emit XML-compatible markup: void elements self-close
    /// (`<br />` instead of `<br>`) and boolean attributes are never
    /// collapsed to a bare name.
    pub xml: bool,

    /// Serialize an element's attributes in lexicographic order by name
    /// rather than insertion order. Useful for snapshot-stable output.
    pub sort_attributes: bool,

    /// Insert newlines and indentation between sibling elements.
    /// Not yet implemented beyond the flag itself; reserved for a future
    /// pretty-printing pass.
    pub pretty: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            shallow: false,
            shallow_high_order: false,
            xml: false,
            sort_attributes: false,
            pretty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let opts = Options::default();
        assert!(!opts.shallow);
        assert!(!opts.shallow_high_order);
        assert!(!opts.xml);
        assert!(!opts.sort_attributes);
        assert!(!opts.pretty);
    }
}
