//! The notation vocabulary on both sides of the rewriter.
//!
//! Rules that mention a macro or a Lurch word have to reference the
//! constants defined in this module and must not use strings directly.

pub mod latex {
    //! This module contains the LaTeX macros understood by the rewriter.

    /// The macro for implication.
    pub const RIGHTARROW: &str = r"\Rightarrow";
    /// The macro for equivalence.
    pub const LEFTRIGHTARROW: &str = r"\Leftrightarrow";
    /// The macro for divisibility.
    pub const MID: &str = r"\mid";
    /// The macro for similarity.
    pub const SIM: &str = r"\sim";
    /// The postfix factorial sign.
    pub const FACTORIAL: &str = "!";
    /// The macro for lambda.
    pub const LAMBDA: &str = r"\lambda";
    /// The arrow pair marking a contradiction.
    pub const CONTRADICTION: &str = r"\rightarrow\leftarrow";
    /// The prefix of sized opening delimiters.
    pub const LEFT: &str = r"\left";
    /// The prefix of sized closing delimiters.
    pub const RIGHT: &str = r"\right";
    /// Brackets that may follow [LEFT].
    pub const OPENING_BRACKETS: [char; 3] = ['(', '{', '['];
    /// Brackets that may follow [RIGHT].
    pub const CLOSING_BRACKETS: [char; 2] = [')', '}'];
    /// The macro for upright text in math mode.
    pub const MATHRM: &str = r"\mathrm";
    /// The macro for text in math mode.
    pub const TEXT: &str = r"\text";
    /// Opening token of a group.
    pub const OPEN_GROUP: char = '{';
    /// Closing token of a group.
    pub const CLOSE_GROUP: char = '}';
    /// The token introducing a macro.
    pub const ESCAPE: char = '\\';
}

pub mod lurch {
    //! This module contains the Lurch words the rewriter produces.

    /// Implication.
    pub const IMPLIES: &str = "implies";
    /// Equivalence.
    pub const IFF: &str = "iff";
    /// Divisibility.
    pub const DIVIDES: &str = "divides";
    /// Similarity.
    pub const SIM: &str = "~";
    /// Postfix factorial, separated from its operand.
    pub const FACTORIAL: &str = " factorial";
    /// The lambda glyph.
    pub const LAMBDA: &str = "λ";
    /// Contradiction, padded on both sides.
    pub const CONTRADICTION: &str = " contradiction ";
    /// What leftover group and escape tokens turn into.
    pub const BLANK: &str = " ";
}
