//! Depth-first traversal of a descriptor tree.
//!
//! Entries are visited in generation order. A location is the chain of
//! generated names from the root down to the entry, so the accessor for
//! `user.tags[].value` sits at `["$USER", "$TAGS", "VALUE_FIELD"]`.
//!
//! [`DescriptorVisitor::enter_group`] runs before a group's entries and
//! [`DescriptorVisitor::leave_group`] after them (unless the walk stopped).

use alloc::string::String;
use alloc::vec::Vec;

use crate::descriptor::{Accessor, Entry, FieldsGroup};

/// Decision returned by a visitor to control traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitDecision {
    /// Keep going, descending into groups.
    Recurse,
    /// Do not descend into this group. Same as `Recurse` for accessors.
    SkipChildren,
    /// Stop the walk immediately.
    Stop,
}

/// Outcome of [`walk_descriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// Every reachable entry was visited.
    Completed,
    /// A visitor returned [`VisitDecision::Stop`].
    Stopped,
}

/// Callbacks for [`walk_descriptor`].
pub trait DescriptorVisitor<'a> {
    /// Called for every group, the root included (with an empty location).
    fn enter_group(&mut self, location: &[&'a str], group: &'a FieldsGroup) -> VisitDecision {
        let _ = (location, group);
        VisitDecision::Recurse
    }

    /// Called after a group's entries, or right after `enter_group` returned
    /// [`VisitDecision::SkipChildren`].
    fn leave_group(&mut self, location: &[&'a str], group: &'a FieldsGroup) {
        let _ = (location, group);
    }

    /// Called for every `*_FIELD` and `PATH` accessor.
    fn visit_accessor(&mut self, location: &[&'a str], accessor: &'a Accessor) -> VisitDecision;
}

/// Walk `root` depth-first, calling `visitor` along the way.
pub fn walk_descriptor<'a>(
    root: &'a FieldsGroup,
    visitor: &mut impl DescriptorVisitor<'a>,
) -> WalkStatus {
    let mut location = Vec::new();
    if walk_group(root, visitor, &mut location) {
        WalkStatus::Stopped
    } else {
        WalkStatus::Completed
    }
}

/// Returns `true` if the walk was stopped.
fn walk_group<'a>(
    group: &'a FieldsGroup,
    visitor: &mut impl DescriptorVisitor<'a>,
    location: &mut Vec<&'a str>,
) -> bool {
    match visitor.enter_group(location, group) {
        VisitDecision::Stop => return true,
        VisitDecision::SkipChildren => {
            visitor.leave_group(location, group);
            return false;
        }
        VisitDecision::Recurse => {}
    }

    for (name, entry) in group.iter() {
        location.push(name);
        let stopped = match entry {
            Entry::Value(_) => false,
            Entry::Accessor(accessor) => {
                visitor.visit_accessor(location, accessor) == VisitDecision::Stop
            }
            Entry::Group(inner) => walk_group(inner, visitor, location),
        };
        location.pop();
        if stopped {
            return true;
        }
    }

    visitor.leave_group(location, group);
    false
}

struct AccessorCollector<'a> {
    found: Vec<(String, &'a Accessor)>,
}

impl<'a> DescriptorVisitor<'a> for AccessorCollector<'a> {
    fn visit_accessor(&mut self, location: &[&'a str], accessor: &'a Accessor) -> VisitDecision {
        self.found.push((location.join("."), accessor));
        VisitDecision::Recurse
    }
}

impl FieldsGroup {
    /// Every accessor in the tree with its dot-joined location, depth-first.
    ///
    /// The locations can be passed back to [`FieldsGroup::find`] and
    /// [`FieldsGroup::resolve`].
    pub fn accessors(&self) -> Vec<(String, &Accessor)> {
        let mut collector = AccessorCollector { found: Vec::new() };
        walk_descriptor(self, &mut collector);
        collector.found
    }
}
