//! Conditional-compilation wrapping.

use crate::builder::CodeFragment;

/// Closing directive for every guard.
const ENDIF: &str = "#endif";

/// Optional preprocessor guard owned by one member.
///
/// Every artifact derived from a guarded member is wrapped on its own:
/// the opening test before it and exactly one `#endif` after it. Unguarded
/// members pass through untouched.
///
/// # Example
///
/// ```
/// use adtgen_codegen::{CodeFragment, ConditionalGuard};
///
/// let guard = ConditionalGuard::new(Some("#ifdef FEATURE_X"));
/// let wrapped = guard.wrap(vec![CodeFragment::line("int m_Ctx;")]);
/// assert_eq!(
///     wrapped,
///     vec![
///         CodeFragment::directive("#ifdef FEATURE_X"),
///         CodeFragment::line("int m_Ctx;"),
///         CodeFragment::directive("#endif"),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConditionalGuard<'a> {
    open: Option<&'a str>,
}

impl<'a> ConditionalGuard<'a> {
    pub fn new(open: Option<&'a str>) -> Self {
        Self {
            open: open.map(str::trim),
        }
    }

    /// Wrap `body` in the guard.
    pub fn wrap(&self, body: Vec<CodeFragment>) -> Vec<CodeFragment> {
        match self.open {
            Some(open) => {
                let mut out = Vec::with_capacity(body.len() + 2);
                out.push(CodeFragment::directive(open));
                out.extend(body);
                out.push(CodeFragment::directive(ENDIF));
                out
            }
            None => body,
        }
    }
}
