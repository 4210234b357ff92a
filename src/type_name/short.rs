use core::fmt;

/// A type name displayed without module paths.
///
/// Every path segment followed by `::` is dropped, at every nesting level,
/// so `core::option::Option<alloc::string::String>` displays as
/// `Option<String>`. Identifier boundaries follow Unicode `XID_Start` /
/// `XID_Continue`, the rules Rust identifiers use. Displaying does not
/// allocate.
///
/// # Examples
///
/// ```
/// use function_traits::type_name::ShortTypeName;
///
/// let name = ShortTypeName::new("core::option::Option<alloc::string::String>");
/// assert_eq!(name.to_string(), "Option<String>");
///
/// let name = ShortTypeName::new("fn(&dyn core::fmt::Debug) -> core::result::Result<(), std::io::Error>");
/// assert_eq!(name.to_string(), "fn(&dyn Debug) -> Result<(), Error>");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct ShortTypeName<'a> {
    full: &'a str,
}

impl<'a> ShortTypeName<'a> {
    /// Wraps a full type name.
    #[must_use]
    pub const fn new(full: &'a str) -> Self {
        Self { full }
    }

    /// The full name this was created from.
    #[must_use]
    pub const fn full(&self) -> &'a str {
        self.full
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

impl fmt::Display for ShortTypeName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.full;

        while let Some(c) = rest.chars().next() {
            if is_ident_start(c) {
                let end = rest
                    .char_indices()
                    .find(|&(_, c)| !unicode_ident::is_xid_continue(c))
                    .map_or(rest.len(), |(i, _)| i);
                let (ident, tail) = rest.split_at(end);

                match tail.strip_prefix("::") {
                    Some(after_separator) => rest = after_separator,
                    None => {
                        f.write_str(ident)?;
                        rest = tail;
                    }
                }
            } else {
                let (punct, tail) = rest.split_at(c.len_utf8());
                f.write_str(punct)?;
                rest = tail;
            }
        }

        Ok(())
    }
}
