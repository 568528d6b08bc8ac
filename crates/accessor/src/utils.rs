//! String helpers shared by the accessor functions.

/// Convert a dash-separated name to camelCase (`background-color` →
/// `backgroundColor`). Names without dashes pass through unchanged.
pub(crate) fn to_camel_case(name: &str) -> String {
    if !name.contains('-') {
        return name.to_string();
    }

    let mut output = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            output.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            output.push(ch);
        }
    }
    output
}
