//! Character normalization for keystroke matching
//!
//! Maps any character to a canonical lowercase base form so that a typed `e`
//! matches a stored `é`, `E` or `Ê`. Only used to decide whether a trie
//! character matches a typed code; stored words keep their original spelling.

/// Number of characters covered by [`BASE_CHARS`]
pub const BASE_TABLE_SIZE: usize = 0x500;

/// Fold passes needed to reach a fixed point. Some table entries map to
/// another combined character (U+01D5 -> U+00DC), and a few characters above
/// the table lowercase into it (U+212B ANGSTROM SIGN -> U+00E5).
const FOLD_PASSES: usize = 2;

/// Normalize a character to its lowercase base form.
///
/// Total over `char` and idempotent.
#[inline]
pub fn normalize(c: char) -> char {
    let mut current = c;
    for _ in 0..FOLD_PASSES {
        let folded = fold(current);
        if folded == current {
            break;
        }
        current = folded;
    }
    current
}

/// One table lookup followed by a case fold
#[inline]
fn fold(c: char) -> char {
    let base = BASE_CHARS.get(c as usize).copied().unwrap_or(c);
    if base.is_ascii_uppercase() {
        base.to_ascii_lowercase()
    } else if (base as u32) > 127 {
        to_single_lowercase(base)
    } else {
        base
    }
}

/// Lowercase when the mapping is a single character, otherwise keep `c`
#[inline]
fn to_single_lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Base characters of the first 1280 code points (Latin, Greek, Cyrillic).
///
/// `BASE_CHARS[c] == c` when `c` is not a combined character, otherwise the
/// base character. A few entries fold typographic marks to a space or the
/// closest ASCII letter (U+00DF -> `s`, U+00F8 -> `o`).
#[rustfmt::skip]
pub static BASE_CHARS: [char; BASE_TABLE_SIZE] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{0004}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0008}', '\u{0009}', '\u{000a}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{0014}', '\u{0015}', '\u{0016}', '\u{0017}',
    '\u{0018}', '\u{0019}', '\u{001a}', '\u{001b}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0020}', '\u{0021}', '\u{0022}', '\u{0023}', '\u{0024}', '\u{0025}', '\u{0026}', '\u{0027}',
    '\u{0028}', '\u{0029}', '\u{002a}', '\u{002b}', '\u{002c}', '\u{002d}', '\u{002e}', '\u{002f}',
    '\u{0030}', '\u{0031}', '\u{0032}', '\u{0033}', '\u{0034}', '\u{0035}', '\u{0036}', '\u{0037}',
    '\u{0038}', '\u{0039}', '\u{003a}', '\u{003b}', '\u{003c}', '\u{003d}', '\u{003e}', '\u{003f}',
    '\u{0040}', '\u{0041}', '\u{0042}', '\u{0043}', '\u{0044}', '\u{0045}', '\u{0046}', '\u{0047}',
    '\u{0048}', '\u{0049}', '\u{004a}', '\u{004b}', '\u{004c}', '\u{004d}', '\u{004e}', '\u{004f}',
    '\u{0050}', '\u{0051}', '\u{0052}', '\u{0053}', '\u{0054}', '\u{0055}', '\u{0056}', '\u{0057}',
    '\u{0058}', '\u{0059}', '\u{005a}', '\u{005b}', '\u{005c}', '\u{005d}', '\u{005e}', '\u{005f}',
    '\u{0060}', '\u{0061}', '\u{0062}', '\u{0063}', '\u{0064}', '\u{0065}', '\u{0066}', '\u{0067}',
    '\u{0068}', '\u{0069}', '\u{006a}', '\u{006b}', '\u{006c}', '\u{006d}', '\u{006e}', '\u{006f}',
    '\u{0070}', '\u{0071}', '\u{0072}', '\u{0073}', '\u{0074}', '\u{0075}', '\u{0076}', '\u{0077}',
    '\u{0078}', '\u{0079}', '\u{007a}', '\u{007b}', '\u{007c}', '\u{007d}', '\u{007e}', '\u{007f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{0085}', '\u{0086}', '\u{0087}',
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{008d}', '\u{008e}', '\u{008f}',
    '\u{0090}', '\u{0091}', '\u{0092}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0097}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{009c}', '\u{009d}', '\u{009e}', '\u{009f}',
    '\u{0020}', '\u{00a1}', '\u{00a2}', '\u{00a3}', '\u{00a4}', '\u{00a5}', '\u{00a6}', '\u{00a7}',
    '\u{0020}', '\u{00a9}', '\u{0061}', '\u{00ab}', '\u{00ac}', '\u{00ad}', '\u{00ae}', '\u{0020}',
    '\u{00b0}', '\u{00b1}', '\u{0032}', '\u{0033}', '\u{0020}', '\u{03bc}', '\u{00b6}', '\u{00b7}',
    '\u{0020}', '\u{0031}', '\u{006f}', '\u{00bb}', '\u{0031}', '\u{0031}', '\u{0033}', '\u{00bf}',
    '\u{0041}', '\u{0041}', '\u{0041}', '\u{0041}', '\u{0041}', '\u{0041}', '\u{00c6}', '\u{0043}',
    '\u{0045}', '\u{0045}', '\u{0045}', '\u{0045}', '\u{0049}', '\u{0049}', '\u{0049}', '\u{0049}',
    '\u{00d0}', '\u{004e}', '\u{004f}', '\u{004f}', '\u{004f}', '\u{004f}', '\u{004f}', '\u{00d7}',
    '\u{004f}', '\u{0055}', '\u{0055}', '\u{0055}', '\u{0055}', '\u{0059}', '\u{00de}', '\u{0073}',
    '\u{0061}', '\u{0061}', '\u{0061}', '\u{0061}', '\u{0061}', '\u{0061}', '\u{00e6}', '\u{0063}',
    '\u{0065}', '\u{0065}', '\u{0065}', '\u{0065}', '\u{0069}', '\u{0069}', '\u{0069}', '\u{0069}',
    '\u{00f0}', '\u{006e}', '\u{006f}', '\u{006f}', '\u{006f}', '\u{006f}', '\u{006f}', '\u{00f7}',
    '\u{006f}', '\u{0075}', '\u{0075}', '\u{0075}', '\u{0075}', '\u{0079}', '\u{00fe}', '\u{0079}',
    '\u{0041}', '\u{0061}', '\u{0041}', '\u{0061}', '\u{0041}', '\u{0061}', '\u{0043}', '\u{0063}',
    '\u{0043}', '\u{0063}', '\u{0043}', '\u{0063}', '\u{0043}', '\u{0063}', '\u{0044}', '\u{0064}',
    '\u{0110}', '\u{0111}', '\u{0045}', '\u{0065}', '\u{0045}', '\u{0065}', '\u{0045}', '\u{0065}',
    '\u{0045}', '\u{0065}', '\u{0045}', '\u{0065}', '\u{0047}', '\u{0067}', '\u{0047}', '\u{0067}',
    '\u{0047}', '\u{0067}', '\u{0047}', '\u{0067}', '\u{0048}', '\u{0068}', '\u{0126}', '\u{0127}',
    '\u{0049}', '\u{0069}', '\u{0049}', '\u{0069}', '\u{0049}', '\u{0069}', '\u{0049}', '\u{0069}',
    '\u{0049}', '\u{0131}', '\u{0049}', '\u{0069}', '\u{004a}', '\u{006a}', '\u{004b}', '\u{006b}',
    '\u{0138}', '\u{004c}', '\u{006c}', '\u{004c}', '\u{006c}', '\u{004c}', '\u{006c}', '\u{004c}',
    '\u{006c}', '\u{0141}', '\u{0142}', '\u{004e}', '\u{006e}', '\u{004e}', '\u{006e}', '\u{004e}',
    '\u{006e}', '\u{02bc}', '\u{014a}', '\u{014b}', '\u{004f}', '\u{006f}', '\u{004f}', '\u{006f}',
    '\u{004f}', '\u{006f}', '\u{0152}', '\u{0153}', '\u{0052}', '\u{0072}', '\u{0052}', '\u{0072}',
    '\u{0052}', '\u{0072}', '\u{0053}', '\u{0073}', '\u{0053}', '\u{0073}', '\u{0053}', '\u{0073}',
    '\u{0053}', '\u{0073}', '\u{0054}', '\u{0074}', '\u{0054}', '\u{0074}', '\u{0166}', '\u{0167}',
    '\u{0055}', '\u{0075}', '\u{0055}', '\u{0075}', '\u{0055}', '\u{0075}', '\u{0055}', '\u{0075}',
    '\u{0055}', '\u{0075}', '\u{0055}', '\u{0075}', '\u{0057}', '\u{0077}', '\u{0059}', '\u{0079}',
    '\u{0059}', '\u{005a}', '\u{007a}', '\u{005a}', '\u{007a}', '\u{005a}', '\u{007a}', '\u{0073}',
    '\u{0180}', '\u{0181}', '\u{0182}', '\u{0183}', '\u{0184}', '\u{0185}', '\u{0186}', '\u{0187}',
    '\u{0188}', '\u{0189}', '\u{018a}', '\u{018b}', '\u{018c}', '\u{018d}', '\u{018e}', '\u{018f}',
    '\u{0190}', '\u{0191}', '\u{0192}', '\u{0193}', '\u{0194}', '\u{0195}', '\u{0196}', '\u{0197}',
    '\u{0198}', '\u{0199}', '\u{019a}', '\u{019b}', '\u{019c}', '\u{019d}', '\u{019e}', '\u{019f}',
    '\u{004f}', '\u{006f}', '\u{01a2}', '\u{01a3}', '\u{01a4}', '\u{01a5}', '\u{01a6}', '\u{01a7}',
    '\u{01a8}', '\u{01a9}', '\u{01aa}', '\u{01ab}', '\u{01ac}', '\u{01ad}', '\u{01ae}', '\u{0055}',
    '\u{0075}', '\u{01b1}', '\u{01b2}', '\u{01b3}', '\u{01b4}', '\u{01b5}', '\u{01b6}', '\u{01b7}',
    '\u{01b8}', '\u{01b9}', '\u{01ba}', '\u{01bb}', '\u{01bc}', '\u{01bd}', '\u{01be}', '\u{01bf}',
    '\u{01c0}', '\u{01c1}', '\u{01c2}', '\u{01c3}', '\u{0044}', '\u{0044}', '\u{0064}', '\u{004c}',
    '\u{004c}', '\u{006c}', '\u{004e}', '\u{004e}', '\u{006e}', '\u{0041}', '\u{0061}', '\u{0049}',
    '\u{0069}', '\u{004f}', '\u{006f}', '\u{0055}', '\u{0075}', '\u{00dc}', '\u{00fc}', '\u{00dc}',
    '\u{00fc}', '\u{00dc}', '\u{00fc}', '\u{00dc}', '\u{00fc}', '\u{01dd}', '\u{00c4}', '\u{00e4}',
    '\u{0226}', '\u{0227}', '\u{00c6}', '\u{00e6}', '\u{01e4}', '\u{01e5}', '\u{0047}', '\u{0067}',
    '\u{004b}', '\u{006b}', '\u{004f}', '\u{006f}', '\u{01ea}', '\u{01eb}', '\u{01b7}', '\u{0292}',
    '\u{006a}', '\u{0044}', '\u{0044}', '\u{0064}', '\u{0047}', '\u{0067}', '\u{01f6}', '\u{01f7}',
    '\u{004e}', '\u{006e}', '\u{00c5}', '\u{00e5}', '\u{00c6}', '\u{00e6}', '\u{00d8}', '\u{00f8}',
    '\u{0041}', '\u{0061}', '\u{0041}', '\u{0061}', '\u{0045}', '\u{0065}', '\u{0045}', '\u{0065}',
    '\u{0049}', '\u{0069}', '\u{0049}', '\u{0069}', '\u{004f}', '\u{006f}', '\u{004f}', '\u{006f}',
    '\u{0052}', '\u{0072}', '\u{0052}', '\u{0072}', '\u{0055}', '\u{0075}', '\u{0055}', '\u{0075}',
    '\u{0053}', '\u{0073}', '\u{0054}', '\u{0074}', '\u{021c}', '\u{021d}', '\u{0048}', '\u{0068}',
    '\u{0220}', '\u{0221}', '\u{0222}', '\u{0223}', '\u{0224}', '\u{0225}', '\u{0041}', '\u{0061}',
    '\u{0045}', '\u{0065}', '\u{00d6}', '\u{00f6}', '\u{00d5}', '\u{00f5}', '\u{004f}', '\u{006f}',
    '\u{022e}', '\u{022f}', '\u{0059}', '\u{0079}', '\u{0234}', '\u{0235}', '\u{0236}', '\u{0237}',
    '\u{0238}', '\u{0239}', '\u{023a}', '\u{023b}', '\u{023c}', '\u{023d}', '\u{023e}', '\u{023f}',
    '\u{0240}', '\u{0241}', '\u{0242}', '\u{0243}', '\u{0244}', '\u{0245}', '\u{0246}', '\u{0247}',
    '\u{0248}', '\u{0249}', '\u{024a}', '\u{024b}', '\u{024c}', '\u{024d}', '\u{024e}', '\u{024f}',
    '\u{0250}', '\u{0251}', '\u{0252}', '\u{0253}', '\u{0254}', '\u{0255}', '\u{0256}', '\u{0257}',
    '\u{0258}', '\u{0259}', '\u{025a}', '\u{025b}', '\u{025c}', '\u{025d}', '\u{025e}', '\u{025f}',
    '\u{0260}', '\u{0261}', '\u{0262}', '\u{0263}', '\u{0264}', '\u{0265}', '\u{0266}', '\u{0267}',
    '\u{0268}', '\u{0269}', '\u{026a}', '\u{026b}', '\u{026c}', '\u{026d}', '\u{026e}', '\u{026f}',
    '\u{0270}', '\u{0271}', '\u{0272}', '\u{0273}', '\u{0274}', '\u{0275}', '\u{0276}', '\u{0277}',
    '\u{0278}', '\u{0279}', '\u{027a}', '\u{027b}', '\u{027c}', '\u{027d}', '\u{027e}', '\u{027f}',
    '\u{0280}', '\u{0281}', '\u{0282}', '\u{0283}', '\u{0284}', '\u{0285}', '\u{0286}', '\u{0287}',
    '\u{0288}', '\u{0289}', '\u{028a}', '\u{028b}', '\u{028c}', '\u{028d}', '\u{028e}', '\u{028f}',
    '\u{0290}', '\u{0291}', '\u{0292}', '\u{0293}', '\u{0294}', '\u{0295}', '\u{0296}', '\u{0297}',
    '\u{0298}', '\u{0299}', '\u{029a}', '\u{029b}', '\u{029c}', '\u{029d}', '\u{029e}', '\u{029f}',
    '\u{02a0}', '\u{02a1}', '\u{02a2}', '\u{02a3}', '\u{02a4}', '\u{02a5}', '\u{02a6}', '\u{02a7}',
    '\u{02a8}', '\u{02a9}', '\u{02aa}', '\u{02ab}', '\u{02ac}', '\u{02ad}', '\u{02ae}', '\u{02af}',
    '\u{0068}', '\u{0266}', '\u{006a}', '\u{0072}', '\u{0279}', '\u{027b}', '\u{0281}', '\u{0077}',
    '\u{0079}', '\u{02b9}', '\u{02ba}', '\u{02bb}', '\u{02bc}', '\u{02bd}', '\u{02be}', '\u{02bf}',
    '\u{02c0}', '\u{02c1}', '\u{02c2}', '\u{02c3}', '\u{02c4}', '\u{02c5}', '\u{02c6}', '\u{02c7}',
    '\u{02c8}', '\u{02c9}', '\u{02ca}', '\u{02cb}', '\u{02cc}', '\u{02cd}', '\u{02ce}', '\u{02cf}',
    '\u{02d0}', '\u{02d1}', '\u{02d2}', '\u{02d3}', '\u{02d4}', '\u{02d5}', '\u{02d6}', '\u{02d7}',
    '\u{0020}', '\u{0020}', '\u{0020}', '\u{0020}', '\u{0020}', '\u{0020}', '\u{02de}', '\u{02df}',
    '\u{0263}', '\u{006c}', '\u{0073}', '\u{0078}', '\u{0295}', '\u{02e5}', '\u{02e6}', '\u{02e7}',
    '\u{02e8}', '\u{02e9}', '\u{02ea}', '\u{02eb}', '\u{02ec}', '\u{02ed}', '\u{02ee}', '\u{02ef}',
    '\u{02f0}', '\u{02f1}', '\u{02f2}', '\u{02f3}', '\u{02f4}', '\u{02f5}', '\u{02f6}', '\u{02f7}',
    '\u{02f8}', '\u{02f9}', '\u{02fa}', '\u{02fb}', '\u{02fc}', '\u{02fd}', '\u{02fe}', '\u{02ff}',
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0304}', '\u{0305}', '\u{0306}', '\u{0307}',
    '\u{0308}', '\u{0309}', '\u{030a}', '\u{030b}', '\u{030c}', '\u{030d}', '\u{030e}', '\u{030f}',
    '\u{0310}', '\u{0311}', '\u{0312}', '\u{0313}', '\u{0314}', '\u{0315}', '\u{0316}', '\u{0317}',
    '\u{0318}', '\u{0319}', '\u{031a}', '\u{031b}', '\u{031c}', '\u{031d}', '\u{031e}', '\u{031f}',
    '\u{0320}', '\u{0321}', '\u{0322}', '\u{0323}', '\u{0324}', '\u{0325}', '\u{0326}', '\u{0327}',
    '\u{0328}', '\u{0329}', '\u{032a}', '\u{032b}', '\u{032c}', '\u{032d}', '\u{032e}', '\u{032f}',
    '\u{0330}', '\u{0331}', '\u{0332}', '\u{0333}', '\u{0334}', '\u{0335}', '\u{0336}', '\u{0337}',
    '\u{0338}', '\u{0339}', '\u{033a}', '\u{033b}', '\u{033c}', '\u{033d}', '\u{033e}', '\u{033f}',
    '\u{0300}', '\u{0301}', '\u{0342}', '\u{0313}', '\u{0308}', '\u{0345}', '\u{0346}', '\u{0347}',
    '\u{0348}', '\u{0349}', '\u{034a}', '\u{034b}', '\u{034c}', '\u{034d}', '\u{034e}', '\u{034f}',
    '\u{0350}', '\u{0351}', '\u{0352}', '\u{0353}', '\u{0354}', '\u{0355}', '\u{0356}', '\u{0357}',
    '\u{0358}', '\u{0359}', '\u{035a}', '\u{035b}', '\u{035c}', '\u{035d}', '\u{035e}', '\u{035f}',
    '\u{0360}', '\u{0361}', '\u{0362}', '\u{0363}', '\u{0364}', '\u{0365}', '\u{0366}', '\u{0367}',
    '\u{0368}', '\u{0369}', '\u{036a}', '\u{036b}', '\u{036c}', '\u{036d}', '\u{036e}', '\u{036f}',
    '\u{0370}', '\u{0371}', '\u{0372}', '\u{0373}', '\u{02b9}', '\u{0375}', '\u{0376}', '\u{0377}',
    '\u{0378}', '\u{0379}', '\u{0020}', '\u{037b}', '\u{037c}', '\u{037d}', '\u{003b}', '\u{037f}',
    '\u{0380}', '\u{0381}', '\u{0382}', '\u{0383}', '\u{0020}', '\u{00a8}', '\u{0391}', '\u{00b7}',
    '\u{0395}', '\u{0397}', '\u{0399}', '\u{038b}', '\u{039f}', '\u{038d}', '\u{03a5}', '\u{03a9}',
    '\u{03ca}', '\u{0391}', '\u{0392}', '\u{0393}', '\u{0394}', '\u{0395}', '\u{0396}', '\u{0397}',
    '\u{0398}', '\u{0399}', '\u{039a}', '\u{039b}', '\u{039c}', '\u{039d}', '\u{039e}', '\u{039f}',
    '\u{03a0}', '\u{03a1}', '\u{03a2}', '\u{03a3}', '\u{03a4}', '\u{03a5}', '\u{03a6}', '\u{03a7}',
    '\u{03a8}', '\u{03a9}', '\u{0399}', '\u{03a5}', '\u{03b1}', '\u{03b5}', '\u{03b7}', '\u{03b9}',
    '\u{03cb}', '\u{03b1}', '\u{03b2}', '\u{03b3}', '\u{03b4}', '\u{03b5}', '\u{03b6}', '\u{03b7}',
    '\u{03b8}', '\u{03b9}', '\u{03ba}', '\u{03bb}', '\u{03bc}', '\u{03bd}', '\u{03be}', '\u{03bf}',
    '\u{03c0}', '\u{03c1}', '\u{03c2}', '\u{03c3}', '\u{03c4}', '\u{03c5}', '\u{03c6}', '\u{03c7}',
    '\u{03c8}', '\u{03c9}', '\u{03b9}', '\u{03c5}', '\u{03bf}', '\u{03c5}', '\u{03c9}', '\u{03cf}',
    '\u{03b2}', '\u{03b8}', '\u{03a5}', '\u{03d2}', '\u{03d2}', '\u{03c6}', '\u{03c0}', '\u{03d7}',
    '\u{03d8}', '\u{03d9}', '\u{03da}', '\u{03db}', '\u{03dc}', '\u{03dd}', '\u{03de}', '\u{03df}',
    '\u{03e0}', '\u{03e1}', '\u{03e2}', '\u{03e3}', '\u{03e4}', '\u{03e5}', '\u{03e6}', '\u{03e7}',
    '\u{03e8}', '\u{03e9}', '\u{03ea}', '\u{03eb}', '\u{03ec}', '\u{03ed}', '\u{03ee}', '\u{03ef}',
    '\u{03ba}', '\u{03c1}', '\u{03c2}', '\u{03f3}', '\u{0398}', '\u{03b5}', '\u{03f6}', '\u{03f7}',
    '\u{03f8}', '\u{03a3}', '\u{03fa}', '\u{03fb}', '\u{03fc}', '\u{03fd}', '\u{03fe}', '\u{03ff}',
    '\u{0415}', '\u{0415}', '\u{0402}', '\u{0413}', '\u{0404}', '\u{0405}', '\u{0406}', '\u{0406}',
    '\u{0408}', '\u{0409}', '\u{040a}', '\u{040b}', '\u{041a}', '\u{0418}', '\u{0423}', '\u{040f}',
    '\u{0410}', '\u{0411}', '\u{0412}', '\u{0413}', '\u{0414}', '\u{0415}', '\u{0416}', '\u{0417}',
    '\u{0418}', '\u{0418}', '\u{041a}', '\u{041b}', '\u{041c}', '\u{041d}', '\u{041e}', '\u{041f}',
    '\u{0420}', '\u{0421}', '\u{0422}', '\u{0423}', '\u{0424}', '\u{0425}', '\u{0426}', '\u{0427}',
    '\u{0428}', '\u{0429}', '\u{042a}', '\u{042b}', '\u{042c}', '\u{042d}', '\u{042e}', '\u{042f}',
    '\u{0430}', '\u{0431}', '\u{0432}', '\u{0433}', '\u{0434}', '\u{0435}', '\u{0436}', '\u{0437}',
    '\u{0438}', '\u{0438}', '\u{043a}', '\u{043b}', '\u{043c}', '\u{043d}', '\u{043e}', '\u{043f}',
    '\u{0440}', '\u{0441}', '\u{0442}', '\u{0443}', '\u{0444}', '\u{0445}', '\u{0446}', '\u{0447}',
    '\u{0448}', '\u{0449}', '\u{044a}', '\u{044b}', '\u{044c}', '\u{044d}', '\u{044e}', '\u{044f}',
    '\u{0435}', '\u{0435}', '\u{0452}', '\u{0433}', '\u{0454}', '\u{0455}', '\u{0456}', '\u{0456}',
    '\u{0458}', '\u{0459}', '\u{045a}', '\u{045b}', '\u{043a}', '\u{0438}', '\u{0443}', '\u{045f}',
    '\u{0460}', '\u{0461}', '\u{0462}', '\u{0463}', '\u{0464}', '\u{0465}', '\u{0466}', '\u{0467}',
    '\u{0468}', '\u{0469}', '\u{046a}', '\u{046b}', '\u{046c}', '\u{046d}', '\u{046e}', '\u{046f}',
    '\u{0470}', '\u{0471}', '\u{0472}', '\u{0473}', '\u{0474}', '\u{0475}', '\u{0474}', '\u{0475}',
    '\u{0478}', '\u{0479}', '\u{047a}', '\u{047b}', '\u{047c}', '\u{047d}', '\u{047e}', '\u{047f}',
    '\u{0480}', '\u{0481}', '\u{0482}', '\u{0483}', '\u{0484}', '\u{0485}', '\u{0486}', '\u{0487}',
    '\u{0488}', '\u{0489}', '\u{048a}', '\u{048b}', '\u{048c}', '\u{048d}', '\u{048e}', '\u{048f}',
    '\u{0490}', '\u{0491}', '\u{0492}', '\u{0493}', '\u{0494}', '\u{0495}', '\u{0496}', '\u{0497}',
    '\u{0498}', '\u{0499}', '\u{049a}', '\u{049b}', '\u{049c}', '\u{049d}', '\u{049e}', '\u{049f}',
    '\u{04a0}', '\u{04a1}', '\u{04a2}', '\u{04a3}', '\u{04a4}', '\u{04a5}', '\u{04a6}', '\u{04a7}',
    '\u{04a8}', '\u{04a9}', '\u{04aa}', '\u{04ab}', '\u{04ac}', '\u{04ad}', '\u{04ae}', '\u{04af}',
    '\u{04b0}', '\u{04b1}', '\u{04b2}', '\u{04b3}', '\u{04b4}', '\u{04b5}', '\u{04b6}', '\u{04b7}',
    '\u{04b8}', '\u{04b9}', '\u{04ba}', '\u{04bb}', '\u{04bc}', '\u{04bd}', '\u{04be}', '\u{04bf}',
    '\u{04c0}', '\u{0416}', '\u{0436}', '\u{04c3}', '\u{04c4}', '\u{04c5}', '\u{04c6}', '\u{04c7}',
    '\u{04c8}', '\u{04c9}', '\u{04ca}', '\u{04cb}', '\u{04cc}', '\u{04cd}', '\u{04ce}', '\u{04cf}',
    '\u{0410}', '\u{0430}', '\u{0410}', '\u{0430}', '\u{04d4}', '\u{04d5}', '\u{0415}', '\u{0435}',
    '\u{04d8}', '\u{04d9}', '\u{04d8}', '\u{04d9}', '\u{0416}', '\u{0436}', '\u{0417}', '\u{0437}',
    '\u{04e0}', '\u{04e1}', '\u{0418}', '\u{0438}', '\u{0418}', '\u{0438}', '\u{041e}', '\u{043e}',
    '\u{04e8}', '\u{04e9}', '\u{04e8}', '\u{04e9}', '\u{042d}', '\u{044d}', '\u{0423}', '\u{0443}',
    '\u{0423}', '\u{0443}', '\u{0423}', '\u{0443}', '\u{0427}', '\u{0447}', '\u{04f6}', '\u{04f7}',
    '\u{042b}', '\u{044b}', '\u{04fa}', '\u{04fb}', '\u{04fc}', '\u{04fd}', '\u{04fe}', '\u{04ff}',
];
