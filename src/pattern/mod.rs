//! Textual building blocks shared by the rule catalog.

mod block;
mod signature;
mod text;

pub use block::find_block_end;
pub use signature::{ENTRY_POINT, FieldDeclaration, Signature, SignaturePattern};
pub use text::{
    BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, LINE_COMMENT, contains_word,
    has_assignment_or_comparison, integer_literals, is_brace_only, is_comment_lead_in,
    is_comment_line, is_const_declaration, is_ident_byte, is_statement, is_trivial_integer,
};
