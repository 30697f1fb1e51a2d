/// Create a [`HashSet`](std::collections::HashSet) from a list of `&str` to
/// easily create the scopes for the OAuth2 authorization flow.
///
/// Example:
///
/// ```
/// use linkedin_macros::scopes;
/// use std::collections::HashSet;
///
/// let with_macro = scopes!("r_liteprofile", "r_emailaddress");
/// let mut manually = HashSet::new();
/// manually.insert("r_liteprofile".to_owned());
/// manually.insert("r_emailaddress".to_owned());
/// assert_eq!(with_macro, manually);
/// ```
#[macro_export]
macro_rules! scopes {
    ($($key:expr),* $(,)?) => {{
        let mut container = ::std::collections::HashSet::new();
        $(
            container.insert($key.to_owned());
        )*
        container
    }};
}

#[cfg(test)]
mod test {
    use crate::scopes;

    #[test]
    fn test_hashset() {
        let scope = scopes!("r_network", "rw_groups", "w_messages");
        assert_eq!(scope.len(), 3);
        assert!(scope.contains("r_network"));
        assert!(scope.contains("rw_groups"));
        assert!(scope.contains("w_messages"));
    }

    #[test]
    fn test_empty() {
        let scope: std::collections::HashSet<String> = scopes!();
        assert!(scope.is_empty());
    }
}
