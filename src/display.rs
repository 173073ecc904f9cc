//! Line composition: pairs art lines with labelled facts in truecolor

use crate::art::Art;
use crate::data::{FactKind, Facts, Palette};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1b[0m";
/// Blank columns between the art and the labels
const GUTTER: usize = 2;

/// One art line and the width every art line is padded to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtCell<'a> {
    pub line: &'a str,
    pub width: usize,
}

/// Write one colored line: art and label in the accent color, value in the
/// base color, then a reset. Without an art cell no art column is printed.
pub fn render_line<W: Write>(
    out: &mut W,
    palette: &Palette,
    art: Option<ArtCell<'_>>,
    label: &str,
    value: &str,
) -> io::Result<()> {
    write!(out, "{}", palette.accent.ansi_fg())?;

    if let Some(cell) = art {
        let padding = (cell.width + GUTTER).saturating_sub(UnicodeWidthStr::width(cell.line));
        write!(out, " {}{}", cell.line, " ".repeat(padding))?;
    }

    write!(out, "{}{}{}\n{}", label, palette.base.ansi_fg(), value, RESET)
}

/// Write the whole banner: `user@host`, a dash rule, then one line per
/// remaining fact. Line `i` carries art line `i`; facts past the end of the
/// art get a blank art column and surplus art lines are printed on their
/// own. An absent or empty art buffer drops the art column entirely.
pub fn render_banner<W: Write>(
    out: &mut W,
    palette: &Palette,
    facts: &Facts,
    art: Option<&Art>,
) -> io::Result<()> {
    let art = art.filter(|a| !a.is_empty());
    let cell = |index: usize| {
        art.map(|a| ArtCell {
            line: a.line(index).unwrap_or(""),
            width: a.width(),
        })
    };

    let username = facts.display(FactKind::Username);
    let hostname = facts.display(FactKind::Hostname);
    let rule_len = UnicodeWidthStr::width(username) + 1 + UnicodeWidthStr::width(hostname);

    render_line(out, palette, cell(0), &format!("{}@", username), hostname)?;
    render_line(out, palette, cell(1), "", &"-".repeat(rule_len))?;

    for (index, kind) in FactKind::ALL.iter().enumerate().skip(2) {
        render_line(out, palette, cell(index), kind.label(), facts.display(*kind))?;
    }

    if let Some(art) = art {
        for index in FactKind::ALL.len()..art.len() {
            render_line(out, palette, cell(index), "", "")?;
        }
    }

    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Color, NOT_FOUND};

    const ACCENT: &str = "\x1b[38;2;1;2;3m";
    const BASE: &str = "\x1b[38;2;4;5;6m";

    fn palette() -> Palette {
        Palette {
            base: Color::new(4, 5, 6),
            accent: Color::new(1, 2, 3),
        }
    }

    fn facts() -> Facts {
        let mut facts = Facts::default();
        facts.set(FactKind::Username, Some("alice".into()));
        facts.set(FactKind::Hostname, Some("box".into()));
        facts.set(FactKind::Os, Some("Arch Linux".into()));
        facts.set(FactKind::Memory, Some("977MiB / 7813MiB".into()));
        facts
    }

    fn render(art: Option<&Art>) -> Vec<String> {
        let mut out = Vec::new();
        render_banner(&mut out, &palette(), &facts(), art).unwrap();
        String::from_utf8(out)
            .unwrap()
            .split('\n')
            .map(|line| line.strip_prefix(RESET).unwrap_or(line).to_string())
            .collect()
    }

    #[test]
    fn line_with_art_is_padded_to_width_plus_gutter() {
        let mut out = Vec::new();
        let cell = ArtCell { line: "ab", width: 4 };
        render_line(&mut out, &palette(), Some(cell), "OS: ", "Arch").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{} ab    OS: {}Arch\n{}", ACCENT, BASE, RESET));
    }

    #[test]
    fn line_without_art_has_no_column() {
        let mut out = Vec::new();
        render_line(&mut out, &palette(), None, "", "").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}{}\n{}", ACCENT, BASE, RESET));
    }

    #[test]
    fn banner_without_art() {
        let lines = render(None);

        assert_eq!(lines[0], format!("{}alice@{}box", ACCENT, BASE));
        assert_eq!(lines[1], format!("{}{}---------", ACCENT, BASE));
        assert_eq!(lines[2], format!("{}OS: {}Arch Linux", ACCENT, BASE));
        assert_eq!(lines[5], format!("{}Host: {}{}", ACCENT, BASE, NOT_FOUND));
        assert_eq!(lines[9], format!("{}Memory: {}977MiB / 7813MiB", ACCENT, BASE));
        // the last reset and the closing blank line
        assert_eq!(lines[10], "");
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn short_art_leaves_blank_column() {
        let art = Art::from_lines(["/\\", "\\/"]);
        let lines = render(Some(&art));

        assert_eq!(lines[0], format!("{} /\\  alice@{}box", ACCENT, BASE));
        assert_eq!(lines[1], format!("{} \\/  {}---------", ACCENT, BASE));
        assert_eq!(lines[2], format!("{}     OS: {}Arch Linux", ACCENT, BASE));
        assert_eq!(lines[9], format!("{}     Memory: {}977MiB / 7813MiB", ACCENT, BASE));
    }

    #[test]
    fn tall_art_prints_filler_lines() {
        let art = Art::from_lines((0..12).map(|i| format!("#{}", i)));
        let lines = render(Some(&art));

        assert_eq!(lines[9], format!("{} #9   Memory: {}977MiB / 7813MiB", ACCENT, BASE));
        assert_eq!(lines[10], format!("{} #10  {}", ACCENT, BASE));
        assert_eq!(lines[11], format!("{} #11  {}", ACCENT, BASE));
        assert_eq!(lines[12], "");
        assert_eq!(lines.len(), 14);
    }

    #[test]
    fn empty_art_is_treated_as_absent() {
        let empty = Art::default();
        assert_eq!(render(Some(&empty)), render(None));
    }

    #[test]
    fn missing_identity_uses_marker() {
        let mut out = Vec::new();
        render_banner(&mut out, &palette(), &Facts::default(), None).unwrap();

        let text = String::from_utf8(out).unwrap();
        let first = text.lines().next().unwrap();
        assert_eq!(first, format!("{}{}@{}{}", ACCENT, NOT_FOUND, BASE, NOT_FOUND));
    }
}
