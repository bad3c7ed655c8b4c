use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use tracing::{debug, info};

use crate::{keywords::read_keywords, GenError, RuleTemplate};

/// Turns a keyword list file into a file of lexer rules.
#[derive(Clone, Debug)]
pub struct RuleGenerator {
    input: PathBuf,
    output: PathBuf,
    template: RuleTemplate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationSummary {
    pub output: PathBuf,
    pub fragments: usize,
    pub bytes: usize,
}

impl RuleGenerator {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            template: RuleTemplate::default(),
        }
    }

    pub fn with_template(mut self, template: RuleTemplate) -> Self {
        self.template = template;
        self
    }

    /// Reads and renders the keyword list without touching the output path.
    pub fn generate(&self) -> Result<String, GenError> {
        self.render().map(|(_, rendered)| rendered)
    }

    /// Renders the keyword list and overwrites the output file with it.
    ///
    /// The input is read in full before the output is opened, so a missing
    /// input leaves the output untouched. A failed write is not rolled back.
    pub fn run(&self) -> Result<GenerationSummary, GenError> {
        let (fragments, rendered) = self.render()?;
        self.write_output(rendered.as_bytes())?;

        info!(
            "wrote {} rules to {} ({} bytes)",
            fragments,
            self.output.display(),
            rendered.len()
        );

        Ok(GenerationSummary {
            output: self.output.clone(),
            fragments,
            bytes: rendered.len(),
        })
    }

    fn render(&self) -> Result<(usize, String), GenError> {
        let keywords = read_keywords(&self.input)?;
        debug!("read {} keywords from {}", keywords.len(), self.input.display());

        Ok((keywords.len(), self.template.render(&keywords)))
    }

    fn write_output(&self, contents: &[u8]) -> Result<(), GenError> {
        let unwritable = |source: io::Error| GenError::OutputUnwritable {
            path: self.output.clone(),
            source,
        };

        let mut file = File::create(&self.output).map_err(unwritable)?;
        file.write_all(contents).map_err(unwritable)?;
        file.flush().map_err(unwritable)
    }
}
