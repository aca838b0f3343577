//! Test fixtures and constants.

/// Color list texts as a user would paste them
pub mod texts {
    /// Named palette, CSS declaration style
    pub const PALETTE: &str = "Ink: #111111;\nPaper: #fefefe;\nBrand: #0050c8;\n";

    /// Bare hex values, map-entry style with trailing commas
    pub const BACKGROUNDS: &str = "#ffffff,\n#000000,\n";

    /// Nothing parses as a color
    pub const NOISE: &str = "notacolor: alsonotacolor\n\n// comment\n";
}

/// Form-encode pairs for a POST body
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
