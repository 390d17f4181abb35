use ansi_term::Colour;

/// Parses a css hex color (`#rgb` or `#rrggbb`) into a terminal color. Named colors and
/// functional notations aren't supported and return [None].
pub fn css_to_colour(css: &str) -> Option<Colour> {
    let hex = css.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |v: &str| u8::from_str_radix(v, 16).ok();
    match hex.len() {
        3 => {
            let mut channels = hex.chars().map(|c| channel(&c.to_string()).map(|v| v * 17));
            Some(Colour::RGB(
                channels.next()??,
                channels.next()??,
                channels.next()??,
            ))
        }
        6 => Some(Colour::RGB(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}
