use greenrate_core::Dimensions;
use greenrate_core::normalize::normalize;

use super::build_engine;

/// Strategy for dumping what the engine sees in a query.
///
/// Prints the normalized text, every matched field with its raw capture
/// groups, the compound dimensions record, and every true intent predicate.
#[derive(Debug, Clone, Copy)]
pub struct FieldsStrategy;

impl super::CommandStrategy for FieldsStrategy {
    type Input = String;

    async fn execute(&self, text: Self::Input) -> anyhow::Result<()> {
        let engine = build_engine()?;
        let fields = engine.extract(&text);
        let flags = engine.intents(&text);

        println!("=== Normalized ===\n{}\n", normalize(&text));

        println!("Fields:");
        if fields.is_empty() {
            println!("  (none)");
        }
        for (field, capture) in fields.iter() {
            let groups: Vec<&str> = capture
                .groups
                .iter()
                .map(|g| g.as_deref().unwrap_or("-"))
                .collect();
            println!("  {field}: [{}]", groups.join(", "));
        }
        if let Some(dims) = fields.dimensions() {
            println!("  dimensions: {}", describe_dimensions(dims));
        }
        println!();

        println!("Intents:");
        if flags.is_empty() {
            println!("  (none)");
        }
        for (rank, intent) in flags.as_slice().iter().enumerate() {
            let marker = if rank == 0 { "*" } else { " " };
            println!("  {marker} {intent}");
        }

        Ok(())
    }
}

/// One-line summary of the dimensions record with its resolved unit family.
fn describe_dimensions(dims: &Dimensions) -> String {
    let family = dims
        .family()
        .map_or_else(|err| err.to_string(), |family| family.as_str().to_string());
    format!(
        "length {} {}, width {} {} ({family})",
        dims.length, dims.length_unit, dims.width, dims.width_unit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn dimensions(text: &str) -> Dimensions {
        build_engine()
            .expect("default engine should build")
            .extract(text)
            .dimensions()
            .cloned()
            .expect("text should carry length and width with units")
    }

    #[test]
    fn test_describe_dimensions_names_family() {
        assert_eq!(
            describe_dimensions(&dimensions("length = 10 m, width = 4 m")),
            "length 10 m, width 4 m (metric)"
        );
        assert_eq!(
            describe_dimensions(&dimensions("length = 20 ft; width = 10 m")),
            "length 20 ft, width 10 m (Inconsistent units. Length and width must be specified in the same unit, either feet or meters.)"
        );
    }
}
