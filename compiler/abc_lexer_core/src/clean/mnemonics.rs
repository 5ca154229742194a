//! Backslash mnemonics for accented letters and ligatures.
//!
//! `\'e` is `é`, `` \`a `` is `à` and so on. Each mnemonic is the two
//! characters following the backslash.

/// Two-character mnemonics, keyed by the characters after `\`.
pub static MNEMONICS: &[([char; 2], char)] = &[
    // Grave
    (['`', 'A'], 'À'),
    (['`', 'a'], 'à'),
    (['`', 'E'], 'È'),
    (['`', 'e'], 'è'),
    (['`', 'I'], 'Ì'),
    (['`', 'i'], 'ì'),
    (['`', 'O'], 'Ò'),
    (['`', 'o'], 'ò'),
    (['`', 'U'], 'Ù'),
    (['`', 'u'], 'ù'),
    // Acute
    (['\'', 'A'], 'Á'),
    (['\'', 'a'], 'á'),
    (['\'', 'E'], 'É'),
    (['\'', 'e'], 'é'),
    (['\'', 'I'], 'Í'),
    (['\'', 'i'], 'í'),
    (['\'', 'O'], 'Ó'),
    (['\'', 'o'], 'ó'),
    (['\'', 'U'], 'Ú'),
    (['\'', 'u'], 'ú'),
    (['\'', 'Y'], 'Ý'),
    (['\'', 'y'], 'ý'),
    // Circumflex
    (['^', 'A'], 'Â'),
    (['^', 'a'], 'â'),
    (['^', 'E'], 'Ê'),
    (['^', 'e'], 'ê'),
    (['^', 'I'], 'Î'),
    (['^', 'i'], 'î'),
    (['^', 'O'], 'Ô'),
    (['^', 'o'], 'ô'),
    (['^', 'U'], 'Û'),
    (['^', 'u'], 'û'),
    (['^', 'Y'], 'Ŷ'),
    (['^', 'y'], 'ŷ'),
    // Tilde
    (['~', 'A'], 'Ã'),
    (['~', 'a'], 'ã'),
    (['~', 'N'], 'Ñ'),
    (['~', 'n'], 'ñ'),
    (['~', 'O'], 'Õ'),
    (['~', 'o'], 'õ'),
    // Umlaut
    (['"', 'A'], 'Ä'),
    (['"', 'a'], 'ä'),
    (['"', 'E'], 'Ë'),
    (['"', 'e'], 'ë'),
    (['"', 'I'], 'Ï'),
    (['"', 'i'], 'ï'),
    (['"', 'O'], 'Ö'),
    (['"', 'o'], 'ö'),
    (['"', 'U'], 'Ü'),
    (['"', 'u'], 'ü'),
    (['"', 'Y'], 'Ÿ'),
    (['"', 'y'], 'ÿ'),
    // Cedilla
    (['c', 'C'], 'Ç'),
    (['c', 'c'], 'ç'),
    // Ring
    (['A', 'A'], 'Å'),
    (['a', 'a'], 'å'),
    // Slash
    (['/', 'O'], 'Ø'),
    (['/', 'o'], 'ø'),
    // Breve
    (['u', 'A'], 'Ă'),
    (['u', 'a'], 'ă'),
    (['u', 'E'], 'Ĕ'),
    (['u', 'e'], 'ĕ'),
    // Caron
    (['v', 'S'], 'Š'),
    (['v', 's'], 'š'),
    (['v', 'Z'], 'Ž'),
    (['v', 'z'], 'ž'),
    // Double acute
    (['H', 'O'], 'Ő'),
    (['H', 'o'], 'ő'),
    (['H', 'U'], 'Ű'),
    (['H', 'u'], 'ű'),
    // Ligatures
    (['s', 's'], 'ß'),
    (['A', 'E'], 'Æ'),
    (['a', 'e'], 'æ'),
    (['O', 'E'], 'Œ'),
    (['o', 'e'], 'œ'),
];

pub(super) fn lookup(first: char, second: char) -> Option<char> {
    MNEMONICS
        .iter()
        .find(|(key, _)| *key == [first, second])
        .map(|&(_, decoded)| decoded)
}
