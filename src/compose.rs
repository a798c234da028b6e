/// Build the target filename for one file: strip spaces, drop any
/// occurrence of the date token already in the name (and of its bare
/// year), then prefix `<date>_`.
///
/// Stripping the existing token is what makes a second run over
/// already-renamed files reproduce the same names instead of stacking
/// prefixes; the steps must stay in this order.
pub fn compose(original_name: &str, date: &str) -> String {
    let mut name = original_name.replace(' ', "");
    name = name.replace(date, "");
    if date.len() >= 4 {
        name = name.replace(&date[..4], "");
    }
    let name = name.replace("__", "_");
    let composed = format!("{date}_{name}");
    composed.replace("__", "_").replace("--", "-")
}
