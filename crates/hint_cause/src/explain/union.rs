//! Union explainer.
//!
//! A union is violated only when every member is. Members are visited in
//! declaration order; the first satisfied member ends the search with
//! `None`. Otherwise the cause names every attempted member:
//!
//! - plain class members collapse into one disjunction
//!   (`float 1.5 not int or str`);
//! - each composite member contributes its own cause.
//!
//! A single cause is returned as is. Several causes become a bulleted list,
//! one bullet per line, each line indented one level deeper than the
//! sleuth's cause indent:
//!
//! ```text
//! dict {'a': 1} not any member of Union[int, List[int]]:
//!   * dict {'a': 1} not int
//!   * dict {'a': 1} not list
//! ```

use hint_ir::{ClassId, Hint};
use smallvec::SmallVec;

use crate::error::CauseResult;
use crate::explain::Explain;
use crate::label::join_disjunction;
use crate::sleuth::{CauseSleuth, Permute};

pub struct UnionExplainer;

impl Explain for UnionExplainer {
    fn name(&self) -> &'static str {
        "union"
    }

    fn explain(&self, sleuth: &CauseSleuth<'_>) -> CauseResult {
        let Hint::Union(members) = sleuth.hint() else {
            return Err(sleuth.unsupported_hint());
        };
        let classes = sleuth.classes();
        let child_indent = format!("{}{}", sleuth.cause_indent(), sleuth.config().bullet_indent);

        let mut unsatisfied: SmallVec<[ClassId; 4]> = SmallVec::new();
        let mut member_causes: SmallVec<[String; 2]> = SmallVec::new();
        for member in members {
            if member.is_ignorable() {
                return Ok(None);
            }

            let child = sleuth.permute(Permute {
                hint: Some(member),
                cause_indent: Some(&child_indent),
                ..Permute::default()
            });
            let Some(cause) = child.get_cause_or_none()? else {
                return Ok(None);
            };
            // Class members are reported together as one disjunction.
            match member {
                Hint::Class(class) => unsatisfied.push(*class),
                _ => member_causes.push(cause),
            }
        }

        let mut causes: SmallVec<[String; 4]> = SmallVec::new();
        if !unsatisfied.is_empty() {
            let names: SmallVec<[&str; 4]> = unsatisfied.iter().map(|c| classes.name(*c)).collect();
            causes.push(format!(
                "{} not {}",
                sleuth.pith_label(),
                join_disjunction(&names)
            ));
        }
        causes.extend(member_causes);

        let cause = match causes.len() {
            // A union of no members, as `Hint::union` builds from nothing.
            0 => format!("{} not any member of empty union", sleuth.pith_label()),
            1 => causes.swap_remove(0),
            _ => {
                let mut listed = format!(
                    "{} not any member of {}:",
                    sleuth.pith_label(),
                    classes.format_hint(sleuth.hint())
                );
                for cause in &causes {
                    listed.push('\n');
                    listed.push_str(&child_indent);
                    listed.push_str("* ");
                    listed.push_str(cause);
                }
                listed
            }
        };
        Ok(Some(cause))
    }
}
