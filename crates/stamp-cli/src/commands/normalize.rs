//! `stamp normalize`: show the naming forms derived from some text.

use serde::Serialize;
use stamp_core::domain::{namespace_form, slug, title_form};

use crate::{
    cli::{NormalizeArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, PartialEq, Eq, Serialize)]
struct NamingForms {
    input: String,
    slug: String,
    namespace: String,
    title: String,
}

impl NamingForms {
    fn of(input: String) -> Self {
        Self {
            slug: slug(&input),
            namespace: namespace_form(&input),
            title: title_form(&input),
            input,
        }
    }
}

pub fn execute(args: NormalizeArgs, output: OutputManager) -> CliResult<()> {
    let text = args.joined();
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "nothing to normalize; TEXT is blank".into(),
            source: None,
        });
    }
    let forms = NamingForms::of(text);

    if output.format() == OutputFormat::Json {
        output.json(&forms)?;
        return Ok(());
    }

    output.field("slug", &forms.slug)?;
    output.field("namespace", &forms.namespace)?;
    output.field("title", &forms.title)?;
    Ok(())
}
