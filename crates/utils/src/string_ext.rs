/// Extends string types with useful functions
pub trait StringExt {
    /// Capilalises the first letter and lowercases the rest
    ///
    /// Element symbols come in all sorts of cases from user input, this gives
    /// the conventional form.
    ///
    /// ```rust
    /// # use nucdata_utils::StringExt;
    /// assert_eq!("co".capitalise(), "Co".to_string());
    /// assert_eq!("AM".capitalise(), "Am".to_string());
    /// ```
    fn capitalise(&self) -> String;

    /// Strip trailing NUL padding from fixed-width character buffers
    ///
    /// ```rust
    /// # use nucdata_utils::StringExt;
    /// assert_eq!("U235\0\0\0".trim_nul(), "U235");
    /// ```
    fn trim_nul(&self) -> &str;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + &c.as_str().to_lowercase(),
            None => String::new(),
        }
    }

    fn trim_nul(&self) -> &str {
        self.as_ref().trim_end_matches('\0')
    }
}
