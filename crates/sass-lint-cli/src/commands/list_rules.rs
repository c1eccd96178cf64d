//! List rules command implementation.

use sass_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<28} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<8} {:<28} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!(
        "\nproperty-sort-order orders: alphabetical (default), recess, smacss, concentric, \
         or a list of properties"
    );

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  sass-lint check --rules property-sort-order,zero-unit");
    println!("  sass-lint check --rules SL001,SL004");
}
