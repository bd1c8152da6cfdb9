#![no_main]
use binembed::render::{Declaration, Format, base85};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let decl = Declaration {
        source_name: "fuzz.bin",
        original_len: data.len(),
        symbol: "Fuzz",
        compressed: data.first().is_some_and(|b| b & 1 != 0),
        data,
    };

    let text = decl.render(Format::Base85);
    let body = text
        .split_once("=\n\t\"")
        .and_then(|(_, b)| b.strip_suffix("\";\n"))
        .expect("base85 body");
    // '"' and '\\' are never digits: drop line joins and trigraph escapes.
    let digits = body.replace("\"\n\t\"", "").replace('\\', "");
    assert_eq!(digits.as_bytes(), base85::encode(data));

    let text = decl.render(Format::Array);
    assert_eq!(text.matches("0x").count(), data.len().div_ceil(4));
});
