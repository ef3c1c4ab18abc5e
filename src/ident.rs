//! Utility functions for working with type identifiers.

/// Converts a fully qualified Protobuf type name to a flattened declaration
/// identifier by stripping the current package prefix and joining the
/// remaining path segments with underscores.
///
/// The package prefix is only stripped when it matches segment-wise: with
/// package `foo`, `.foo.Bar.Baz` becomes `Bar_Baz` but `.foobar.Baz` keeps
/// its package and becomes `foobar_Baz`. References into a different package
/// therefore flatten with their package segments intact.
pub fn flatten(type_name: &str, package: &str) -> String {
    // protoc should always give fully qualified identifiers.
    assert_eq!(".", &type_name[..1]);

    let ident = &type_name[1..];
    let ident = if package.is_empty() {
        ident
    } else {
        match ident.strip_prefix(package) {
            Some(rest) if rest.starts_with('.') => &rest[1..],
            _ => ident,
        }
    };

    ident.replace('.', "_")
}

/// Joins a namespace prefix and a type name into a declaration identifier.
///
/// Top-level types have an empty prefix and keep their bare name.
pub fn qualify(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}_{}", prefix, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten() {
        assert_eq!("Point", &flatten(".demo.Point", "demo"));
        assert_eq!("Outer_Inner", &flatten(".pkg.Outer.Inner", "pkg"));
        assert_eq!("M", &flatten(".M", ""));
        assert_eq!("a_b_M", &flatten(".a.b.M", "a.b"));
    }

    #[test]
    fn test_flatten_foreign_package() {
        // A prefix that is not a whole-segment match is kept.
        assert_eq!("foobar_M", &flatten(".foobar.M", "foo"));
        assert_eq!("other_T", &flatten(".other.T", "demo"));
    }

    #[test]
    fn test_qualify() {
        assert_eq!("Point", &qualify("", "Point"));
        assert_eq!("Outer_Inner", &qualify("Outer", "Inner"));
        assert_eq!("Outer_Inner_Leaf", &qualify("Outer_Inner", "Leaf"));
    }
}
