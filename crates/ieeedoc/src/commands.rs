/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use anyhow::{Context, Result};
use chrono::Datelike;
use ieeedoc_core::{
    embedded, lint, Author, Command, Editor, IdGenerator, PaperData, Reference, Section, Table,
    TokenKind,
};
use ieeedoc_processor::io::{
    export_json, figure_from_image, import_json, load_commands, load_paper, save_paper,
};
use ieeedoc_processor::render::{html::Html, plain::PlainText};
use ieeedoc_processor::store::{self, Autosave, DirStore};
use ieeedoc_processor::{Processor, RenderedPaper};
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::cli::{AddItem, Format};
use crate::config::Config;

/// The working paper and how to render it.
pub struct Session {
    pub config: Config,
    pub store: DirStore,
}

impl Session {
    pub fn new(config: Config, store: DirStore) -> Self {
        Self { config, store }
    }

    fn paper_from(&self, path: Option<&Path>) -> Result<PaperData> {
        match path {
            Some(path) => {
                load_paper(path).with_context(|| format!("failed to load {}", path.display()))
            }
            None => Ok(store::load(&self.store).into_paper()),
        }
    }

    fn save(&mut self, editor: &Editor) -> Result<()> {
        store::save(&mut self.store, editor).with_context(|| {
            format!("failed to save working paper in {}", self.store.dir().display())
        })
    }

    pub fn new_paper(&self, output: Option<&Path>) -> Result<()> {
        write_output(output, &export_json(&embedded::template())?)
    }

    pub fn render(
        &self,
        paper: Option<&Path>,
        format: Option<Format>,
        output: Option<&Path>,
    ) -> Result<()> {
        let paper = self.paper_from(paper)?;
        let format = format.unwrap_or(self.config.render.format);
        let processor = Processor::with_options(&paper, self.config.render_options());
        let rendered: RenderedPaper = match format {
            Format::Html => processor.process::<Html>(),
            Format::Plain => processor.process::<PlainText>(),
        };
        for missing in &rendered.unresolved {
            tracing::warn!(
                section = %missing.section,
                kind = %missing.kind,
                id = %missing.id,
                "reference token has no target"
            );
        }
        tracing::info!(
            %format,
            figures = rendered.numbering.figures,
            tables = rendered.numbering.tables,
            "rendered paper"
        );
        write_output(output, &rendered.output)
    }

    pub fn check(&self, paper: Option<&Path>, json: bool) -> Result<()> {
        let paper = self.paper_from(paper)?;
        let diagnostics = lint::check(&paper);
        if json {
            println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        } else if diagnostics.is_empty() {
            println!("No problems found.");
        } else {
            for diagnostic in &diagnostics {
                println!("warning: {}", diagnostic);
            }
        }
        Ok(())
    }

    /// Apply `edits` to a paper file, or to the working paper with
    /// debounced saves.
    pub fn apply(&mut self, edits: &Path, paper: Option<&Path>) -> Result<()> {
        let commands = load_commands(edits)
            .with_context(|| format!("failed to load edits from {}", edits.display()))?;
        let total = commands.len();

        let applied = match paper {
            Some(path) => {
                let mut editor = Editor::new(self.paper_from(Some(path))?);
                let applied = dispatch_all(&mut editor, commands, |_| Ok(()))?;
                save_paper(path, editor.snapshot())?;
                applied
            }
            None => {
                let mut editor = store::load(&self.store);
                let mut autosave = Autosave::new(self.config.autosave_interval());
                let store = &mut self.store;
                let applied = dispatch_all(&mut editor, commands, |editor| {
                    autosave.touch(Instant::now());
                    autosave.flush_if_due(Instant::now(), &mut *store, editor)?;
                    Ok(())
                })?;
                autosave.flush(store, &editor)?;
                applied
            }
        };

        println!("Applied {} of {} edits.", applied, total);
        Ok(())
    }

    pub fn add(&mut self, item: AddItem) -> Result<()> {
        let mut editor = store::load(&self.store);
        let id = IdGenerator::new().next_id();
        let command = match item {
            AddItem::Section => Command::AddSection {
                section: Section::placeholder(id.as_str()),
            },
            AddItem::Author => Command::AddAuthor {
                author: Author::default(),
            },
            AddItem::Keyword { text } => Command::AddKeyword { keyword: text },
            AddItem::Table { rows, columns } => Command::AddTable {
                table: Table::with_shape(id.as_str(), rows.max(1), columns.max(1)),
            },
            AddItem::Figure {
                image,
                caption,
                size,
            } => {
                let mut figure = figure_from_image(id.as_str(), &image)
                    .with_context(|| format!("failed to read image {}", image.display()))?;
                if let Some(caption) = caption {
                    figure.caption = caption;
                }
                if let Some(size) = size {
                    figure = figure.resize_to(size.into());
                }
                Command::AddFigure { figure }
            }
            AddItem::Reference => Command::AddReference {
                reference: Reference::blank(id.as_str(), chrono::Local::now().year().to_string()),
            },
        };
        let name = command.name();
        editor.dispatch(command)?;
        self.save(&editor)?;
        println!("{} {}", name, id);
        Ok(())
    }

    pub fn cite(&mut self, kind: TokenKind, id: &str, caret: Option<usize>) -> Result<()> {
        let mut editor = store::load(&self.store);
        let section = editor
            .active_section_id()
            .map(str::to_string)
            .context("the paper has no sections")?;
        let exists = editor.insert_token(caret.unwrap_or(usize::MAX), kind, id);
        self.save(&editor)?;
        println!("Inserted {} into section {}.", ieeedoc_core::token::markup(kind, id), section);
        if !exists {
            println!("warning: no {} `{}` yet", kind.tag().to_lowercase(), id);
        }
        Ok(())
    }

    pub fn select(&mut self, id: Option<&str>) -> Result<()> {
        let mut editor = store::load(&self.store);
        if let Some(id) = id {
            if !editor.select_section(id) {
                anyhow::bail!("no section with id `{}`", id);
            }
            self.save(&editor)?;
        }
        if let Some(section) = editor.active_section() {
            println!("{}\t{}", section.id, section.title);
        }
        Ok(())
    }

    pub fn export(&self, output: &Path) -> Result<()> {
        let editor = store::load(&self.store);
        save_paper(output, editor.snapshot())
            .with_context(|| format!("failed to export to {}", output.display()))?;
        println!("Exported to {}.", output.display());
        Ok(())
    }

    /// Malformed input leaves the working paper as it was.
    pub fn import(&mut self, file: &Path) -> Result<()> {
        let content = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let paper = import_json(&content)
            .with_context(|| format!("{} is not a paper export", file.display()))?;
        store::replace(&mut self.store, paper)?;
        println!("Imported {}.", file.display());
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        store::clear(&mut self.store)?;
        println!("Working paper reset to the template.");
        Ok(())
    }
}

/// Dispatch each command, skipping the ones editor policy refuses.
/// Returns how many were applied.
fn dispatch_all<F>(editor: &mut Editor, commands: Vec<Command>, mut after: F) -> Result<usize>
where
    F: FnMut(&Editor) -> Result<()>,
{
    let mut applied = 0;
    for command in commands {
        let name = command.name();
        match editor.dispatch(command) {
            Ok(()) => {
                applied += 1;
                after(&*editor)?;
            }
            Err(e) => tracing::warn!(op = name, "skipped edit: {}", e),
        }
    }
    Ok(applied)
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}
