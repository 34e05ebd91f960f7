use crate::models::Target;
use crate::targets::{
    copilot::CopilotGenerator, cursor::CursorGenerator, junie::JunieGenerator,
    target_generator::TargetGenerator,
};
use std::collections::BTreeMap;

pub struct TargetRegistry {
    generators: BTreeMap<Target, Box<dyn TargetGenerator>>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        let generators: Vec<Box<dyn TargetGenerator>> = vec![
            Box::new(CursorGenerator),
            Box::new(CopilotGenerator),
            Box::new(JunieGenerator),
        ];

        Self {
            generators: generators
                .into_iter()
                .map(|generator| (generator.target(), generator))
                .collect(),
        }
    }

    pub fn get_generator(&self, target: Target) -> Option<&dyn TargetGenerator> {
        self.generators.get(&target).map(|g| g.as_ref())
    }

    pub fn get_all_targets(&self) -> Vec<Target> {
        self.generators.keys().copied().collect()
    }
}
