// SPDX-License-Identifier: MIT
// Project: decomment
// Description: A program to remove comments from source files.
// File: src/tabs.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::stream::Filter;

pub const DEFAULT_TABSTOP: usize = 8;

/// Replaces each tab with the blanks needed to reach the next tab stop.
#[derive(Debug, Clone, Copy)]
pub struct Detab {
    tabstop: usize,
    col: usize,
}

impl Detab {
    pub fn new(tabstop: usize) -> Self {
        debug_assert!(tabstop > 0);
        Detab { tabstop, col: 0 }
    }
}

impl Default for Detab {
    fn default() -> Self {
        Detab::new(DEFAULT_TABSTOP)
    }
}

impl Filter for Detab {
    fn feed(&mut self, c: char, out: &mut String) {
        match c {
            '\t' => {
                let spaces = self.tabstop - self.col % self.tabstop;
                for _ in 0..spaces {
                    out.push(' ');
                }
                self.col += spaces;
            }
            '\n' => {
                out.push('\n');
                self.col = 0;
            }
            _ => {
                out.push(c);
                self.col += 1;
            }
        }
    }
}

/// Replaces runs of blanks with the minimum tabs and blanks giving the same
/// spacing. Blanks are held back until a tab stop commits them to a tab or a
/// non-blank forces them out.
#[derive(Debug, Clone, Copy)]
pub struct Entab {
    tabstop: usize,
    col: usize,
    spaces: usize,
}

impl Entab {
    pub fn new(tabstop: usize) -> Self {
        debug_assert!(tabstop > 0);
        Entab {
            tabstop,
            col: 0,
            spaces: 0,
        }
    }

    fn flush_spaces(&mut self, out: &mut String) {
        for _ in 0..self.spaces {
            out.push(' ');
        }
        self.spaces = 0;
    }
}

impl Default for Entab {
    fn default() -> Self {
        Entab::new(DEFAULT_TABSTOP)
    }
}

impl Filter for Entab {
    fn feed(&mut self, c: char, out: &mut String) {
        match c {
            ' ' => {
                self.spaces += 1;
                self.col += 1;
                if self.col % self.tabstop == 0 {
                    out.push('\t');
                    self.spaces = 0;
                }
            }
            _ => {
                self.flush_spaces(out);
                out.push(c);
                match c {
                    '\n' => self.col = 0,
                    '\t' => self.col += self.tabstop - self.col % self.tabstop,
                    _ => self.col += 1,
                }
            }
        }
    }

    fn finish(&mut self, out: &mut String) {
        self.flush_spaces(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detab(input: &str, tabstop: usize) -> String {
        let mut out = String::new();
        let mut f = Detab::new(tabstop);
        for c in input.chars() {
            f.feed(c, &mut out);
        }
        f.finish(&mut out);
        out
    }

    fn entab(input: &str, tabstop: usize) -> String {
        let mut out = String::new();
        let mut f = Entab::new(tabstop);
        for c in input.chars() {
            f.feed(c, &mut out);
        }
        f.finish(&mut out);
        out
    }

    #[test]
    fn detab_aligns_to_next_stop() {
        assert_eq!(detab("a\tb", 8), "a       b");
        assert_eq!(detab("\tx", 4), "    x");
        assert_eq!(detab("abc\td", 4), "abc d");
    }

    #[test]
    fn detab_column_resets_at_newline() {
        assert_eq!(detab("ab\t!\ncd\t!", 4), "ab  !\ncd  !");
    }

    #[test]
    fn entab_compresses_full_runs() {
        assert_eq!(entab("        x", 8), "\tx");
        assert_eq!(entab("    x", 4), "\tx");
    }

    #[test]
    fn entab_keeps_short_runs() {
        assert_eq!(entab("a   b", 8), "a   b");
    }

    #[test]
    fn entab_mixes_tabs_and_blanks() {
        // ten blanks at tabstop 8: one tab to column 8, two blanks after
        assert_eq!(entab("          x", 8), "\t  x");
    }

    #[test]
    fn entab_run_not_starting_at_zero() {
        // "ab" then six blanks reaches column 8 exactly
        assert_eq!(entab("ab      x", 8), "ab\tx");
    }

    #[test]
    fn entab_flushes_trailing_blanks_at_eof() {
        assert_eq!(entab("x   ", 8), "x   ");
    }

    #[test]
    fn entab_column_resets_at_newline() {
        assert_eq!(entab("        a\n        b", 8), "\ta\n\tb");
    }

    #[test]
    fn entab_counts_existing_tabs_as_column_jumps() {
        // after the tab the column is 8, so the next 8 blanks make a tab
        assert_eq!(entab("\t        x", 8), "\t\tx");
    }

    #[test]
    fn detab_entab_round_trip_on_aligned_text() {
        let src = "\tint x;\n\t\treturn;\n";
        assert_eq!(entab(&detab(src, 8), 8), src);
    }
}
