use anyhow::Result;
use rune_text::bidi::{
    BidiClass, DisplayOptions, Direction, MAX_EXPLICIT_LEVEL, Paragraph, get_display,
    get_display_bytes, get_display_utf16, get_visual_map,
};

fn upper() -> DisplayOptions {
    DisplayOptions::new().upper_is_rtl(true)
}

/// Expand fribidi CapRTL escapes into explicit formatting characters.
fn cap_rtl(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '_' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('>') => out.push('\u{200E}'),
            Some('<') => out.push('\u{200F}'),
            Some('l') => out.push('\u{202A}'),
            Some('r') => out.push('\u{202B}'),
            Some('o') => out.push('\u{202C}'),
            Some('L') => out.push('\u{202D}'),
            Some('R') => out.push('\u{202E}'),
            Some('_') => out.push('_'),
            Some(other) => {
                out.push('_');
                out.push(other);
            }
            None => out.push('_'),
        }
    }
    out
}

#[test]
fn implicit_cases_with_upper_is_rtl() {
    let cases = [
        ("car is THE CAR in arabic", "car is RAC EHT in arabic"),
        ("CAR IS the car IN ENGLISH", "HSILGNE NI the car SI RAC"),
        ("he said \"IT IS 123, 456, OK\"", "he said \"KO ,456 ,123 SI TI\""),
        ("he said \"IT IS (123, 456), OK\"", "he said \"KO ,(456 ,123) SI TI\""),
        ("he said \"IT IS 123,456, OK\"", "he said \"KO ,123,456 SI TI\""),
        ("he said \"IT IS (123,456), OK\"", "he said \"KO ,(123,456) SI TI\""),
        ("HE SAID \"it is 123, 456, ok\"", "\"it is 123, 456, ok\" DIAS EH"),
        ("<H123>shalom</H123>", "<123H/>shalom<123H>"),
        ("<h123>SAALAM</h123>", "<h123>MALAAS</h123>"),
        ("HE SAID \"it is a car!\" AND RAN", "NAR DNA \"!it is a car\" DIAS EH"),
        ("HE SAID \"it is a car!x\" AND RAN", "NAR DNA \"it is a car!x\" DIAS EH"),
        ("SOLVE 1*5 1-5 1/5 1+5", "1+5 1/5 1-5 5*1 EVLOS"),
        ("THE RANGE IS 2.5..5", "5..2.5 SI EGNAR EHT"),
        ("-2 CELSIUS IS COLD", "DLOC SI SUISLEC 2-"),
    ];

    for (input, expected) in cases {
        assert_eq!(get_display(input, &upper()), expected, "input: {input:?}");
    }
}

#[test]
fn explicit_cases_with_upper_is_rtl() {
    let cases = [
        ("this is _LJUST_o", "this is JUST"),
        ("a _lsimple _RteST_o th_oat", "a simple TSet that"),
        ("HAS A _LPDF missing", "PDF missing A SAH"),
        ("AnD hOw_L AbOuT, 123,987 tHiS_o", "w AbOuT, 123,987 tHiSOh DnA"),
        ("a GOOD - _L_oTEST.", "a TSET - DOOG."),
        ("here_L is_o_o_o _R a good one_o", "here is eno doog a "),
        ("THE _rbest _lONE and", "best ENO and EHT"),
        ("A REAL BIG_l_o BUG!", "!GUB GIB LAER A"),
        (
            "a _L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_L_Rbug",
            "a gub",
        ),
        ("AN ARABIC _l_o 123-456 NICE ONE!", "!ENO ECIN 123-456  CIBARA NA"),
        ("AN ARABIC _l _o 123-456 PAIR", "RIAP   123-456 CIBARA NA"),
        ("this bug 67_r_o89 catched!", "this bug 6789 catched!"),
    ];

    for (input, expected) in cases {
        let text = cap_rtl(input);
        assert_eq!(get_display(&text, &upper()), expected, "input: {input:?}");
    }
}

#[test]
fn override_base_dir() {
    let ltr = upper().base_dir(Direction::Ltr);
    assert_eq!(get_display("SHALOM:", &ltr), "MOLAHS:");
    assert_eq!(get_display("SHALOM:", &upper()), ":MOLAHS");
}

#[test]
fn base_dir_changes_neutral_resolution_deterministically() {
    let text = "SHALOM:";
    let ltr = upper().base_dir(Direction::Ltr);
    let rtl = upper().base_dir(Direction::Rtl);
    let first_ltr = get_display(text, &ltr);
    let first_rtl = get_display(text, &rtl);
    assert_ne!(first_ltr, first_rtl);
    for _ in 0..10 {
        assert_eq!(get_display(text, &ltr), first_ltr);
        assert_eq!(get_display(text, &rtl), first_rtl);
    }
    assert_eq!(get_display("1 - 2", &DisplayOptions::new().base_dir(Direction::Rtl)), "2 - 1");
}

#[test]
fn output_encoding_matches_input() -> Result<()> {
    // "shalom" in windows-1255.
    let storage = [0xf9, 0xec, 0xe5, 0xed];
    let display = get_display_bytes(&storage, "cp1255", &DisplayOptions::new())?;
    assert_eq!(display, vec![0xed, 0xe5, 0xec, 0xf9]);
    Ok(())
}

#[test]
fn surrogate_pairs() -> Result<()> {
    let text = "HELLO \u{1d7f6}12";

    let para = Paragraph::classify(text.chars(), None, true);
    assert_eq!(para.len(), 9);
    assert_eq!(para.chars[6].ch, '\u{1d7f6}');
    assert_eq!(para.chars[6].class, BidiClass::EN);

    assert_eq!(get_display(text, &upper()), "\u{1d7f6}12 OLLEH");

    let units: Vec<u16> = text.encode_utf16().collect();
    assert_eq!(units.len(), 10);
    let display = get_display_utf16(&units, &upper())?;
    assert_eq!(String::from_utf16(&display)?, "\u{1d7f6}12 OLLEH");
    Ok(())
}

#[test]
fn pure_ltr_text_is_unchanged() {
    for text in ["hello", "abcdefghijklmnopqrstuvwxyz", "Straße", "ÀÉÎõü", "x"] {
        assert_eq!(get_display(text, &DisplayOptions::new()), text);
        assert_eq!(
            get_visual_map(text, &DisplayOptions::new()),
            (0..text.chars().count()).collect::<Vec<_>>()
        );
    }
}

#[test]
fn brackets_mirror_in_rtl_context() {
    assert_eq!(get_display("ABC (DEF) [GH]", &upper()), "[HG] (FED) CBA");
    assert_eq!(get_display("אב (ג)", &DisplayOptions::new()), "(ג) בא");
    // Reversing and swapping the brackets by hand gives the same result.
    let input = "A (B) C";
    let manual: String = input
        .chars()
        .rev()
        .map(rune_text::bidi::mirrored_bracket)
        .collect();
    assert_eq!(get_display(input, &upper()), manual);
}

#[test]
fn separators_split_lines_and_keep_base_level() {
    assert_eq!(get_display("AB\nCD ef", &upper()), "BA\nef DC");
    assert_eq!(get_display("abc\tDEF ghi", &upper()), "abc\tFED ghi");
    assert_eq!(get_display("WORD  ", &upper()), "  DROW");
}

#[test]
fn deep_nesting_never_overflows() {
    let lre = "\u{202A}".repeat(200);
    let pdf = "\u{202C}".repeat(200);
    let text = format!("{lre}abc 123{pdf}def");
    assert_eq!(get_display(&text, &upper()), "abc 123def");

    let rlo = "\u{202E}".repeat(200);
    let pdf = "\u{202C}".repeat(300);
    let text = format!("{rlo}abc 123{pdf}DEF");
    assert_eq!(get_display(&text, &upper()), "FED321 cba");

    for control in ['\u{202A}', '\u{202B}', '\u{202D}', '\u{202E}'] {
        let text: String = std::iter::repeat(control)
            .take(500)
            .chain("a1 B2 \u{0661}".chars())
            .collect();
        let mut para = Paragraph::classify(text.chars(), None, false);
        para.resolve_explicit();
        assert!(para.chars.iter().all(|r| r.level < MAX_EXPLICIT_LEVEL));
        para.resolve_weak();
        para.resolve_neutral();
        para.resolve_implicit();
        assert!(para.chars.iter().all(|r| r.level <= MAX_EXPLICIT_LEVEL));
        para.reorder();
        para.apply_mirroring();
        assert_eq!(para.len(), 7);
    }
}

#[test]
fn arabic_digit_at_deepest_embedding_stays_within_limit() {
    let text: String = std::iter::repeat('\u{202A}')
        .take(200)
        .chain(std::iter::once('\u{0661}'))
        .collect();
    let mut para = Paragraph::classify(text.chars(), None, false);
    para.resolve_explicit();
    para.resolve_weak();
    para.resolve_neutral();
    para.resolve_implicit();
    assert_eq!(para.levels(), vec![MAX_EXPLICIT_LEVEL]);
}

#[test]
fn unassigned_code_point_does_not_split_rtl_text() {
    assert_eq!(get_display("AB\u{0378}CD", &upper()), "DC\u{0378}BA");
    assert_eq!(get_display("ab \u{0378} cd", &upper()), "ab \u{0378} cd");
}

#[test]
fn empty_string() {
    for base_dir in [None, Some(Direction::Ltr), Some(Direction::Rtl)] {
        for upper_is_rtl in [false, true] {
            let options = DisplayOptions::new()
                .base_dir(base_dir)
                .upper_is_rtl(upper_is_rtl);
            assert_eq!(get_display("", &options), "");
        }
    }
}

#[test]
fn visual_map_tracks_input_positions() {
    let text = "car is THE CAR";
    let map = get_visual_map(text, &upper());
    let chars: Vec<char> = text.chars().collect();
    let shown: String = map.iter().map(|&i| chars[i]).collect();
    assert_eq!(shown, get_display(text, &upper()));
}
