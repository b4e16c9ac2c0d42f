use serde::Serialize;
use tljson::tl::{Constructor, Registry, Result, TlError};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Constructor or interface to describe.
	#[arg(long = "type")]
	pub type_name: Option<String>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct SummaryJson<'a> {
	constructors: usize,
	objects: usize,
	functions: usize,
	interfaces: Vec<InterfaceJson<'a>>,
}

#[derive(Serialize)]
struct InterfaceJson<'a> {
	name: &'a str,
	variants: Vec<&'a str>,
}

#[derive(Serialize)]
struct ConstructorJson<'a> {
	name: &'a str,
	result: &'a str,
	function: bool,
	fields: Vec<FieldJson<'a>>,
}

#[derive(Serialize)]
struct FieldJson<'a> {
	name: &'a str,
	kind: String,
	optional: bool,
}

/// Print the registry summary or the layout of one named type.
pub fn run(args: Args) -> Result<()> {
	let Args { type_name, json } = args;
	let registry = Registry::global();

	let Some(name) = type_name else {
		return print_summary(registry, json);
	};

	if let Some(item) = registry.constructor(&name) {
		return print_constructor(item, json);
	}
	if registry.has_interface(&name) {
		return print_interface(&interface_json(registry, &name), json);
	}
	Err(TlError::UnknownType { name })
}

fn print_summary(registry: &Registry, json: bool) -> Result<()> {
	let functions = registry.constructors().iter().filter(|item| item.is_function).count();
	let summary = SummaryJson {
		constructors: registry.constructors().len(),
		objects: registry.constructors().len() - functions,
		functions,
		interfaces: registry.interface_names().into_iter().map(|name| interface_json(registry, name)).collect(),
	};

	if json {
		return emit_json(&summary);
	}

	println!("constructors: {}", summary.constructors);
	println!("objects: {}", summary.objects);
	println!("functions: {}", summary.functions);
	println!("interfaces:");
	for item in &summary.interfaces {
		println!("  {}: {}", item.name, item.variants.len());
	}
	Ok(())
}

fn print_constructor(item: &Constructor, json: bool) -> Result<()> {
	let payload = ConstructorJson {
		name: &item.name,
		result: &item.result,
		function: item.is_function,
		fields: item
			.fields
			.iter()
			.map(|field| FieldJson {
				name: &field.name,
				kind: field.kind.to_string(),
				optional: field.optional,
			})
			.collect(),
	};

	if json {
		return emit_json(&payload);
	}

	println!("constructor: {}", payload.name);
	println!("result: {}", payload.result);
	println!("function: {}", payload.function);
	println!("field_count: {}", payload.fields.len());
	for field in &payload.fields {
		let marker = if field.optional { "?" } else { "" };
		println!("  {}:{}{}", field.name, field.kind, marker);
	}
	Ok(())
}

fn print_interface(payload: &InterfaceJson<'_>, json: bool) -> Result<()> {
	if json {
		return emit_json(payload);
	}

	println!("interface: {}", payload.name);
	println!("variant_count: {}", payload.variants.len());
	for variant in &payload.variants {
		println!("  {variant}");
	}
	Ok(())
}

fn interface_json<'a>(registry: &'a Registry, name: &'a str) -> InterfaceJson<'a> {
	InterfaceJson {
		name,
		variants: registry.variants(name).into_iter().map(Constructor::discriminator).collect(),
	}
}

#[cfg(test)]
mod tests;
