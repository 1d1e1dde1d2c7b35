use greenrate_core::formulas::FORMULAS;
use greenrate_core::{Field, IntentClassifier, Phrase};

/// Strategy for listing the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct IntentsStrategy;

impl super::CommandStrategy for IntentsStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let classifier = IntentClassifier::with_defaults();

        for spec in &FORMULAS {
            let phrases: Vec<String> = classifier
                .phrases(spec.intent)
                .iter()
                .map(describe_phrase)
                .collect();
            let inputs: Vec<&str> = spec.inputs.iter().map(Field::label).collect();

            println!("{:>2}. {}", spec.intent.priority() + 1, spec.intent);
            println!("    phrases: {}", phrases.join(", "));
            println!("    inputs:  {}", inputs.join(", "));
        }

        Ok(())
    }
}

fn describe_phrase(phrase: &Phrase) -> String {
    match phrase {
        Phrase::Contains(text) => format!("\"{text}\""),
        Phrase::Word(word) => format!("\"{word}\" (word)"),
    }
}
