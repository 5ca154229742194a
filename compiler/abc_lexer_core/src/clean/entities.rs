//! HTML-style character references: `&eacute;`, `&#233;`, `&#xE9;`.

/// Longest reference name accepted between `&` and `;`.
const MAX_REFERENCE_LEN: usize = 16;

/// Named entities understood in text.
pub static ENTITIES: &[(&str, char)] = &[
    ("Agrave", 'À'),
    ("agrave", 'à'),
    ("Aacute", 'Á'),
    ("aacute", 'á'),
    ("Acirc", 'Â'),
    ("acirc", 'â'),
    ("Atilde", 'Ã'),
    ("atilde", 'ã'),
    ("Auml", 'Ä'),
    ("auml", 'ä'),
    ("Aring", 'Å'),
    ("aring", 'å'),
    ("AElig", 'Æ'),
    ("aelig", 'æ'),
    ("Ccedil", 'Ç'),
    ("ccedil", 'ç'),
    ("Egrave", 'È'),
    ("egrave", 'è'),
    ("Eacute", 'É'),
    ("eacute", 'é'),
    ("Ecirc", 'Ê'),
    ("ecirc", 'ê'),
    ("Euml", 'Ë'),
    ("euml", 'ë'),
    ("Igrave", 'Ì'),
    ("igrave", 'ì'),
    ("Iacute", 'Í'),
    ("iacute", 'í'),
    ("Icirc", 'Î'),
    ("icirc", 'î'),
    ("Iuml", 'Ï'),
    ("iuml", 'ï'),
    ("Ntilde", 'Ñ'),
    ("ntilde", 'ñ'),
    ("Ograve", 'Ò'),
    ("ograve", 'ò'),
    ("Oacute", 'Ó'),
    ("oacute", 'ó'),
    ("Ocirc", 'Ô'),
    ("ocirc", 'ô'),
    ("Otilde", 'Õ'),
    ("otilde", 'õ'),
    ("Ouml", 'Ö'),
    ("ouml", 'ö'),
    ("Oslash", 'Ø'),
    ("oslash", 'ø'),
    ("Ugrave", 'Ù'),
    ("ugrave", 'ù'),
    ("Uacute", 'Ú'),
    ("uacute", 'ú'),
    ("Ucirc", 'Û'),
    ("ucirc", 'û'),
    ("Uuml", 'Ü'),
    ("uuml", 'ü'),
    ("Yacute", 'Ý'),
    ("yacute", 'ý'),
    ("Yuml", 'Ÿ'),
    ("yuml", 'ÿ'),
    ("szlig", 'ß'),
    ("OElig", 'Œ'),
    ("oelig", 'œ'),
    ("Scaron", 'Š'),
    ("scaron", 'š'),
    ("Zcaron", 'Ž'),
    ("zcaron", 'ž'),
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("copy", '©'),
    ("reg", '®'),
    ("deg", '°'),
    ("laquo", '«'),
    ("raquo", '»'),
    ("ndash", '–'),
    ("mdash", '—'),
    ("hellip", '…'),
    ("sharp", '♯'),
    ("flat", '♭'),
    ("natural", '♮'),
];

/// Decode a reference starting just after `&`.
///
/// Returns the decoded character and the number of bytes consumed,
/// including the closing `;`.
pub(super) fn decode_reference(after_amp: &str) -> Option<(char, usize)> {
    let end = after_amp
        .char_indices()
        .take(MAX_REFERENCE_LEN + 1)
        .find(|&(_, c)| c == ';')
        .map(|(i, _)| i)?;
    let name = &after_amp[..end];
    let decoded = match name.strip_prefix('#') {
        Some(number) => numeric_reference(number)?,
        None => ENTITIES
            .iter()
            .find(|(entity, _)| *entity == name)
            .map(|&(_, c)| c)?,
    };
    Some((decoded, end + 1))
}

fn numeric_reference(number: &str) -> Option<char> {
    let (digits, radix) = match number
        .strip_prefix('x')
        .or_else(|| number.strip_prefix('X'))
    {
        Some(hex) => (hex, 16),
        None => (number, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok().and_then(char::from_u32)
}
