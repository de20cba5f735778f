use log::{debug, trace};

use crate::chosen_path::ChosenPath;
use crate::decisions::{Decisions, OccurrenceCount};
use crate::error::GeneratorError;
use crate::registry::TypeRegistry;
use crate::structures::{
    ChoiceOfElements, ComplexType, MaxOccurs, QualifiedName, SimpleType, Structure, StructureElement,
    TopLevelElement,
};

/// How many times a field referencing the same type may be nested before the
/// traversal stops unrolling it
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Observer of one traversal.
///
/// One walk drives many observers: option discovery records the choice
/// events, rendering consumes the enter/leaf/exit events. Every hook has a
/// no-op default so an observer only implements what it cares about.
pub trait TraverseHooks {
    /// The element at `path` can occur a varying number of times
    fn on_occurrence_choice(
        &mut self,
        _path: &ChosenPath,
        _counts: &[OccurrenceCount],
    ) -> Result<(), GeneratorError> {
        Ok(())
    }

    /// The element at `path` can resolve to more than one concrete implementation
    fn on_implementation_choice(
        &mut self,
        _path: &ChosenPath,
        _candidates: &[QualifiedName],
    ) -> Result<(), GeneratorError> {
        Ok(())
    }

    /// The choice group at `path` has more than one branch left to pick from
    fn on_choice_possible(&mut self, _path: &ChosenPath, _indices: &[usize]) -> Result<(), GeneratorError> {
        Ok(())
    }

    fn on_enter_complex(&mut self, _name: &str, _path: &ChosenPath) -> Result<(), GeneratorError> {
        Ok(())
    }

    fn on_exit_complex(&mut self, _path: &ChosenPath) -> Result<(), GeneratorError> {
        Ok(())
    }

    fn on_simple_leaf(
        &mut self,
        _name: &str,
        _simple: &SimpleType,
        _path: &ChosenPath,
    ) -> Result<(), GeneratorError> {
        Ok(())
    }
}

/// One element position about to be visited
struct ElementSite<'a> {
    name: &'a str,
    type_ref: &'a QualifiedName,
    occurs: Option<(u32, MaxOccurs)>,
    root: bool,
}

/// The recursive walk over a type graph.
///
/// Every step pushes its position onto the path, reports the forks that are
/// still open at that position, follows either the decided branch or every
/// possible one, and pops on the way back out. The walk always terminates:
/// recursion is cut off once a field type repeats `max_depth` times on the
/// path, and occurrence counts are always resolved to a finite number.
pub struct Traverser<'a> {
    registry: &'a TypeRegistry,
    decisions: &'a Decisions,
    max_depth: usize,
}

impl<'a> Traverser<'a> {
    pub fn new(registry: &'a TypeRegistry, decisions: &'a Decisions) -> Self {
        Traverser {
            registry,
            decisions,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn traverse(&self, element: &TopLevelElement, hooks: &mut dyn TraverseHooks) -> Result<(), GeneratorError> {
        let mut path = ChosenPath::new();
        let site = ElementSite {
            name: &element.name.name,
            type_ref: &element.type_ref,
            occurs: None,
            root: true,
        };
        self.visit(&site, &mut path, hooks)
    }

    fn visit(
        &self,
        site: &ElementSite<'_>,
        path: &mut ChosenPath,
        hooks: &mut dyn TraverseHooks,
    ) -> Result<(), GeneratorError> {
        let count = self.resolve_occurrence_count(site, path, hooks)?;

        for _ in 0..count {
            self.push_site(site, path);
            self.visit_once(site, path, hooks)?;
            path.pop();
        }

        Ok(())
    }

    /// Settle how many times the element renders before walking into it.
    ///
    /// The candidate set is reported with the element pushed onto the path so
    /// the fork's key matches where the element will actually render. Without
    /// a decision, an optional element still renders once: the default count
    /// is `min_occurs` when positive, otherwise one.
    fn resolve_occurrence_count(
        &self,
        site: &ElementSite<'_>,
        path: &mut ChosenPath,
        hooks: &mut dyn TraverseHooks,
    ) -> Result<u32, GeneratorError> {
        let Some((min, max)) = site.occurs else {
            return Ok(1);
        };
        if max == MaxOccurs::Bounded(min) {
            return Ok(min);
        }

        self.push_site(site, path);
        let decided = self.decisions.occurrence_decision(&path.to_string());
        let count = match decided {
            Some(count) => {
                let within_range = count >= min
                    && match max {
                        MaxOccurs::Bounded(bound) => count <= bound,
                        MaxOccurs::Unbounded => true,
                    };
                if !within_range {
                    return Err(GeneratorError::InvalidDecision {
                        path: path.to_string(),
                        reason: format!("occurrence count {} is outside the allowed range", count),
                    });
                }
                count
            }
            None => {
                hooks.on_occurrence_choice(path, &occurrence_candidates(min, max))?;
                if min > 0 { min } else { 1 }
            }
        };
        path.pop();

        Ok(count)
    }

    fn push_site(&self, site: &ElementSite<'_>, path: &mut ChosenPath) {
        if site.root {
            path.push_root(site.name);
        } else {
            path.push_element(site.name, site.type_ref);
        }
    }

    fn visit_once(
        &self,
        site: &ElementSite<'_>,
        path: &mut ChosenPath,
        hooks: &mut dyn TraverseHooks,
    ) -> Result<(), GeneratorError> {
        trace!("{path}");

        let structure = self.registry.get_structure(site.type_ref).ok_or_else(|| {
            GeneratorError::UnresolvedType {
                element: site.name.to_string(),
                type_ref: site.type_ref.clone(),
                path: path.to_string(),
            }
        })?;

        match structure {
            Structure::Complex(complex) => self.visit_complex(site, complex, path, hooks),
            Structure::Simple(simple) => hooks.on_simple_leaf(site.name, simple, path),
        }
    }

    fn visit_complex(
        &self,
        site: &ElementSite<'_>,
        complex: &ComplexType,
        path: &mut ChosenPath,
        hooks: &mut dyn TraverseHooks,
    ) -> Result<(), GeneratorError> {
        let mut possible: Vec<&ComplexType> = Vec::new();
        if !complex.abstract_ {
            possible.push(complex);
        }
        possible.extend(self.registry.concrete_implementations_of(&complex.name));

        if !possible.iter().any(|candidate| !candidate.abstract_) {
            return Err(GeneratorError::NoConcreteImplementation {
                type_name: complex.name.clone(),
                path: path.to_string(),
            });
        }

        let follow: Vec<&ComplexType> = match self.decisions.implementation_decision(&path.to_string()) {
            Some(decided) => match self.registry.get_structure(decided) {
                Some(Structure::Complex(chosen)) => vec![chosen],
                _ => {
                    return Err(GeneratorError::InvalidDecision {
                        path: path.to_string(),
                        reason: format!("chosen implementation {} is not a known complex type", decided),
                    });
                }
            },
            None => possible.clone(),
        };

        if follow.len() > 1 {
            let candidates: Vec<QualifiedName> = follow.iter().map(|candidate| candidate.name.clone()).collect();
            debug!("{path}: multiple implementations possible: {candidates:?}");
            hooks.on_implementation_choice(path, &candidates)?;
        }

        for candidate in follow {
            if possible.len() > 1 || complex.abstract_ {
                path.mark_implementation(candidate.name.clone());
            }

            hooks.on_enter_complex(site.name, path)?;
            if !candidate.abstract_ {
                let mut children: Vec<&StructureElement> = Vec::new();
                for parent in self.registry.parent_chain_of(candidate) {
                    children.extend(parent.content.iter());
                }
                children.extend(candidate.content.iter());
                self.visit_group(&children, path, hooks)?;
            }
            hooks.on_exit_complex(path)?;
        }

        Ok(())
    }

    fn visit_group(
        &self,
        children: &[&StructureElement],
        path: &mut ChosenPath,
        hooks: &mut dyn TraverseHooks,
    ) -> Result<(), GeneratorError> {
        for child in children {
            self.visit_group_child(child, path, hooks)?;
        }
        Ok(())
    }

    fn visit_group_child(
        &self,
        child: &StructureElement,
        path: &mut ChosenPath,
        hooks: &mut dyn TraverseHooks,
    ) -> Result<(), GeneratorError> {
        match child {
            StructureElement::Field(field) => {
                if path.recursion_will_start_when_adding(&field.type_ref, self.max_depth) {
                    trace!("{path}: not descending into {}, recursion limit reached", field.name);
                    return Ok(());
                }
                let site = ElementSite {
                    name: &field.name,
                    type_ref: &field.type_ref,
                    occurs: Some((field.min_occurs, field.max_occurs)),
                    root: false,
                };
                self.visit(&site, path, hooks)
            }
            StructureElement::Reference(reference) => {
                let target = self.registry.get_element(&reference.ref_).ok_or_else(|| {
                    GeneratorError::UnresolvedType {
                        element: reference.ref_.name.clone(),
                        type_ref: reference.ref_.clone(),
                        path: path.to_string(),
                    }
                })?;
                if path.recursion_will_start_when_adding(&target.type_ref, self.max_depth) {
                    trace!("{path}: not descending into {}, recursion limit reached", target.name.name);
                    return Ok(());
                }
                let site = ElementSite {
                    name: &target.name.name,
                    type_ref: &target.type_ref,
                    occurs: Some((reference.min_occurs, reference.max_occurs)),
                    root: false,
                };
                self.visit(&site, path, hooks)
            }
            StructureElement::Sequence(sequence) => {
                path.push_sequence();
                if !sequence.children.is_empty() {
                    let children: Vec<&StructureElement> = sequence.children.iter().collect();
                    self.visit_group(&children, path, hooks)?;
                }
                path.pop();
                Ok(())
            }
            StructureElement::Choice(choice) => {
                path.push_choice();
                let outcome = self.visit_choice_children(choice, path, hooks);
                path.pop();
                outcome
            }
        }
    }

    fn visit_choice_children(
        &self,
        choice: &ChoiceOfElements,
        path: &mut ChosenPath,
        hooks: &mut dyn TraverseHooks,
    ) -> Result<(), GeneratorError> {
        if choice.children.is_empty() {
            return Ok(());
        }

        let follow: Vec<(usize, &StructureElement)> = match self.decisions.choice_decision(&path.to_string()) {
            Some(index) => {
                let Some(chosen) = choice.children.get(index) else {
                    return Err(GeneratorError::InvalidDecision {
                        path: path.to_string(),
                        reason: format!(
                            "choice index {} is out of range for {} branches",
                            index,
                            choice.children.len()
                        ),
                    });
                };
                vec![(index, chosen)]
            }
            None => choice.children.iter().enumerate().collect(),
        };

        if follow.len() > 1 {
            debug!("{path}: choice between {} branches", follow.len());
            let indices: Vec<usize> = (0..choice.children.len()).collect();
            hooks.on_choice_possible(path, &indices)?;
        }

        for (index, child) in follow {
            if choice.children.len() > 1 {
                path.mark_choice_index(index);
            }
            self.visit_group_child(child, path, hooks)?;
        }

        Ok(())
    }
}

fn occurrence_candidates(min: u32, max: MaxOccurs) -> Vec<OccurrenceCount> {
    match max {
        MaxOccurs::Bounded(bound) => (min..=bound).map(OccurrenceCount::Times).collect(),
        MaxOccurs::Unbounded => vec![OccurrenceCount::Times(0), OccurrenceCount::Unbounded],
    }
}
