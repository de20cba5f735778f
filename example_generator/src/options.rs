use std::collections::HashSet;

use crate::chosen_path::ChosenPath;
use crate::decisions::{Choice, Decision, Decisions, OccurrenceCount};
use crate::error::GeneratorError;
use crate::registry::TypeRegistry;
use crate::structures::{QualifiedName, TopLevelElement};
use crate::traverser::{TraverseHooks, Traverser};

/// Collects every fork a traversal reports, with no other side effects
#[derive(Debug, Default)]
struct ChoiceCollector {
    choices: Vec<Choice>,
}

impl TraverseHooks for ChoiceCollector {
    fn on_occurrence_choice(&mut self, path: &ChosenPath, counts: &[OccurrenceCount]) -> Result<(), GeneratorError> {
        self.choices.push(Choice::Occurrences {
            path: path.to_string(),
            counts: counts.to_vec(),
        });
        Ok(())
    }

    fn on_implementation_choice(
        &mut self,
        path: &ChosenPath,
        candidates: &[QualifiedName],
    ) -> Result<(), GeneratorError> {
        self.choices.push(Choice::Implementation {
            path: path.to_string(),
            candidates: candidates.to_vec(),
        });
        Ok(())
    }

    fn on_choice_possible(&mut self, path: &ChosenPath, indices: &[usize]) -> Result<(), GeneratorError> {
        self.choices.push(Choice::Index {
            path: path.to_string(),
            indices: indices.to_vec(),
        });
        Ok(())
    }
}

/// Lists the forks that are still unresolved for a given decision state.
///
/// Supports the iterative loop of discovering forks, converting one into a
/// decision with the same path, and re-discovering, until the list comes back
/// empty and the traversal is fully determined.
pub struct OptionFinder<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> OptionFinder<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        OptionFinder { registry }
    }

    pub fn available_forks_through_element(
        &self,
        element: &TopLevelElement,
        decisions: &Decisions,
    ) -> Result<Vec<Choice>, GeneratorError> {
        let mut collector = ChoiceCollector::default();
        Traverser::new(self.registry, decisions).traverse(element, &mut collector)?;
        Ok(collector.choices)
    }
}

/// Resolve every implementation fork by always taking the first candidate
/// offered, one path at a time, until none remain.
///
/// Choice-branch and occurrence forks are left for the caller: the defaults
/// applied at render time already give them a deterministic outcome.
pub fn first_choice_everywhere(
    registry: &TypeRegistry,
    element: &TopLevelElement,
) -> Result<Decisions, GeneratorError> {
    let finder = OptionFinder::new(registry);
    let mut decided = Decisions::new();
    let mut visited_paths: HashSet<String> = HashSet::new();

    loop {
        let forks = finder.available_forks_through_element(element, &decided)?;
        let next = forks.into_iter().find_map(|fork| match fork {
            Choice::Implementation { path, candidates } if !visited_paths.contains(&path) => {
                candidates.into_iter().next().map(|first| (path, first))
            }
            _ => None,
        });

        match next {
            Some((path, first)) => {
                visited_paths.insert(path.clone());
                decided = decided.with(Decision::implementation(&path, first));
            }
            None => return Ok(decided),
        }
    }
}
