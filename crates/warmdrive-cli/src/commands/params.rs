//! Parameter listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use warmdrive_core::ParameterInfo;
use warmdrive_effects::WarmDrive;

#[derive(Args)]
pub struct ParamsArgs {
    /// Show details for one parameter (name, short name, or string id)
    #[arg(value_name = "NAME")]
    name: Option<String>,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let engine = WarmDrive::new();

    if let Some(name) = &args.name {
        let index = engine
            .find_param_by_name(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown parameter: {name}"))?;
        let desc = engine
            .param_info(index)
            .ok_or_else(|| anyhow::anyhow!("Unknown parameter: {name}"))?;

        println!("{}", desc.name);
        println!("{}", "=".repeat(desc.name.len()));
        println!();
        println!("  Id:         {}", desc.id.0);
        println!("  String id:  {}", desc.string_id);
        println!("  Short name: {}", desc.short_name);
        println!("  Range:      {}..={}{}", desc.min, desc.max, desc.unit.suffix());
        println!("  Center:     {}", desc.center);
        println!("  Default:    {}", engine.parameter_str_value(index, desc.default));
        println!();
        println!("Example usage:");
        println!();
        println!(
            "  warmdrive process input.wav output.wav --param {}={}",
            desc.short_name.to_lowercase(),
            desc.center
        );
        return Ok(());
    }

    println!("WarmDrive Parameters");
    println!("====================");
    println!();
    println!(
        "  {:3}  {:12}  {:8}  {:>10}  {:>8}",
        "Id", "Name", "Short", "Range", "Default"
    );
    println!(
        "  {:3}  {:12}  {:8}  {:>10}  {:>8}",
        "--", "----", "-----", "-----", "-------"
    );

    for index in 0..engine.param_count() {
        let Some(desc) = engine.param_info(index) else {
            continue;
        };
        let range = format!("{}..{}", desc.min, desc.max);
        println!(
            "  {:3}  {:12}  {:8}  {:>10}  {:>8}",
            desc.id.0,
            desc.name,
            desc.short_name,
            range,
            engine.parameter_str_value(index, desc.default).as_str()
        );
    }

    println!();
    println!("Use 'warmdrive params <NAME>' for details.");

    Ok(())
}
