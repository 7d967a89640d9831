//! Interactive journal session
//!
//! Reads one command per line and drives the entry store. The session plays
//! the role of the journal screen: a list view, an editor, and the two
//! confirmation prompts (delete and discard).

use crate::application::{EditorSession, EntryStore};
use crate::cli::output::{format_draft, format_entry_list, format_status, BANNER, HELP};
use crate::domain::{JournalEntry, SortMode};
use crate::error::{JotbookError, Result};
use log::info;
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

/// One parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    List,
    New,
    Open(usize),
    Title(String),
    Body(String),
    AppendBody(String),
    Save,
    Cancel,
    Discard,
    Keep,
    Bookmark(usize),
    Delete(usize),
    Yes,
    No,
    Search(String),
    Sort(SortMode),
    Status,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse an input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "list" | "ls" => SessionCommand::List,
            "new" => SessionCommand::New,
            "open" => SessionCommand::Open(parse_number(rest)?),
            "title" => SessionCommand::Title(rest.to_string()),
            "body" => SessionCommand::Body(rest.to_string()),
            "body+" => SessionCommand::AppendBody(rest.to_string()),
            "save" => SessionCommand::Save,
            "cancel" => SessionCommand::Cancel,
            "discard" => SessionCommand::Discard,
            "keep" => SessionCommand::Keep,
            "bookmark" => SessionCommand::Bookmark(parse_number(rest)?),
            "delete" => SessionCommand::Delete(parse_number(rest)?),
            "yes" | "y" => SessionCommand::Yes,
            "no" | "n" => SessionCommand::No,
            "search" => SessionCommand::Search(rest.to_string()),
            "sort" => SessionCommand::Sort(
                SortMode::from_str(rest).map_err(JotbookError::InvalidArgument)?,
            ),
            "status" => SessionCommand::Status,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            _ => return Err(JotbookError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }

    fn name(&self) -> &'static str {
        match self {
            SessionCommand::List => "list",
            SessionCommand::New => "new",
            SessionCommand::Open(_) => "open",
            SessionCommand::Title(_) => "title",
            SessionCommand::Body(_) => "body",
            SessionCommand::AppendBody(_) => "body+",
            SessionCommand::Save => "save",
            SessionCommand::Cancel => "cancel",
            SessionCommand::Discard => "discard",
            SessionCommand::Keep => "keep",
            SessionCommand::Bookmark(_) => "bookmark",
            SessionCommand::Delete(_) => "delete",
            SessionCommand::Yes => "yes",
            SessionCommand::No => "no",
            SessionCommand::Search(_) => "search",
            SessionCommand::Sort(_) => "sort",
            SessionCommand::Status => "status",
            SessionCommand::Help => "help",
            SessionCommand::Quit => "quit",
        }
    }
}

fn parse_number(arg: &str) -> Result<usize> {
    if arg.is_empty() {
        return Err(JotbookError::InvalidArgument(
            "expected an entry number".to_string(),
        ));
    }
    arg.parse().map_err(|_| {
        JotbookError::InvalidArgument(format!("expected an entry number, got '{}'", arg))
    })
}

enum Mode {
    Browsing,
    Editing(EditorSession),
    ConfirmingDiscard(EditorSession),
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end over an [`EntryStore`]
pub struct Session<W: Write> {
    store: EntryStore,
    mode: Mode,
    out: W,
    stale: Rc<Cell<bool>>,
}

impl<W: Write> Session<W> {
    /// Create a session writing to `out`; the list re-renders after store changes
    pub fn new(mut store: EntryStore, out: W) -> Self {
        let stale = Rc::new(Cell::new(false));
        let flag = Rc::clone(&stale);
        store.subscribe(move |_| flag.set(true));

        Session {
            store,
            mode: Mode::Browsing,
            out,
            stale,
        }
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        info!("event=session_start entries={}", self.store.len());
        self.out.write_all(BANNER.as_bytes())?;
        self.render_list()?;

        for line in input.lines() {
            let line = line?;
            if self.execute_line(&line)? == Flow::Quit {
                break;
            }
        }

        self.out.flush()?;
        info!("event=session_end entries={}", self.store.len());
        Ok(())
    }

    /// Execute one input line, reporting command errors to the output
    fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let result = SessionCommand::parse(line).and_then(|command| match command {
            Some(command) => self.handle(command),
            None => Ok(Flow::Continue),
        });

        let flow = match result {
            Ok(flow) => flow,
            Err(JotbookError::Io(e)) => return Err(JotbookError::Io(e)),
            Err(e) => {
                writeln!(self.out, "Error: {}", e.display_with_suggestions())?;
                Flow::Continue
            }
        };

        if matches!(self.mode, Mode::Browsing)
            && !self.store.deletion().is_awaiting()
            && self.stale.get()
        {
            self.render_list()?;
        }
        Ok(flow)
    }

    fn handle(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Help => {
                self.out.write_all(HELP.as_bytes())?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
            _ => {}
        }

        if self.store.deletion().is_awaiting() {
            return self.handle_delete_prompt(command);
        }

        let mode = std::mem::replace(&mut self.mode, Mode::Browsing);
        match mode {
            Mode::Browsing => self.handle_browsing(command),
            Mode::Editing(editor) => self.handle_editing(editor, command),
            Mode::ConfirmingDiscard(editor) => self.handle_discard_prompt(editor, command),
        }
    }

    fn handle_delete_prompt(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Yes => {
                self.store.confirm_delete();
                writeln!(self.out, "Journal deleted.")?;
            }
            SessionCommand::No => {
                self.store.cancel_delete();
                writeln!(self.out, "Kept.")?;
            }
            _ => writeln!(self.out, "Please answer 'yes' or 'no'.")?,
        }
        Ok(Flow::Continue)
    }

    fn handle_discard_prompt(
        &mut self,
        editor: EditorSession,
        command: SessionCommand,
    ) -> Result<Flow> {
        match command {
            SessionCommand::Discard => {
                editor.cancel(&mut self.store);
                writeln!(self.out, "Changes discarded.")?;
            }
            SessionCommand::Keep => {
                self.mode = Mode::Editing(editor);
            }
            _ => {
                self.mode = Mode::ConfirmingDiscard(editor);
                writeln!(self.out, "Please answer 'discard' or 'keep'.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_editing(
        &mut self,
        mut editor: EditorSession,
        command: SessionCommand,
    ) -> Result<Flow> {
        match command {
            SessionCommand::Title(title) => editor.set_title(title),
            SessionCommand::Body(body) => editor.set_body(body),
            SessionCommand::AppendBody(line) => editor.append_body_line(&line),
            SessionCommand::List | SessionCommand::Status => {
                self.out.write_all(format_draft(&editor).as_bytes())?;
            }
            SessionCommand::Save => match editor.save(&mut self.store) {
                Ok(saved) => {
                    writeln!(self.out, "Saved \"{}\".", saved.display_title())?;
                    return Ok(Flow::Continue);
                }
                Err(e) => {
                    self.mode = Mode::Editing(editor);
                    return Err(e);
                }
            },
            SessionCommand::Cancel => {
                if editor.needs_discard_confirmation() {
                    writeln!(
                        self.out,
                        "Are you sure you want to discard changes on this journal? (discard/keep)"
                    )?;
                    self.mode = Mode::ConfirmingDiscard(editor);
                } else {
                    editor.cancel(&mut self.store);
                    writeln!(self.out, "Closed.")?;
                }
                return Ok(Flow::Continue);
            }
            other => {
                self.mode = Mode::Editing(editor);
                return Err(JotbookError::NotAvailable {
                    command: other.name().to_string(),
                    reason: "while editing; 'save' or 'cancel' first",
                });
            }
        }
        self.mode = Mode::Editing(editor);
        Ok(Flow::Continue)
    }

    fn handle_browsing(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::List => self.render_list()?,
            SessionCommand::New => {
                let entry = self.store.create_empty_entry();
                self.open_editor(entry)?;
            }
            SessionCommand::Open(number) => {
                let entry = self.entry_at(number)?;
                self.open_editor(entry)?;
            }
            SessionCommand::Bookmark(number) => {
                let entry = self.entry_at(number)?;
                self.store.toggle_bookmark(entry.id);
            }
            SessionCommand::Delete(number) => {
                let entry = self.entry_at(number)?;
                self.store.request_delete(&entry);
                writeln!(
                    self.out,
                    "Delete Journal?\nAre you sure you want to delete \"{}\"? (yes/no)",
                    entry.display_title()
                )?;
            }
            SessionCommand::Search(text) => self.store.set_search_text(text),
            SessionCommand::Sort(mode) => self.store.set_sort_mode(mode),
            SessionCommand::Status => {
                let shown = self.store.filtered_and_sorted().len();
                let status = format_status(
                    self.store.len(),
                    shown,
                    self.store.search_text(),
                    self.store.sort_mode(),
                );
                self.out.write_all(status.as_bytes())?;
            }
            SessionCommand::Title(_)
            | SessionCommand::Body(_)
            | SessionCommand::AppendBody(_)
            | SessionCommand::Save
            | SessionCommand::Cancel => return Err(JotbookError::NoOpenDraft),
            other => {
                return Err(JotbookError::NotAvailable {
                    command: other.name().to_string(),
                    reason: "without a pending question",
                })
            }
        }
        Ok(Flow::Continue)
    }

    fn open_editor(&mut self, entry: JournalEntry) -> Result<()> {
        let editor = EditorSession::new(Some(entry));
        writeln!(
            self.out,
            "Editing. Use 'title', 'body', 'body+', then 'save' or 'cancel'."
        )?;
        self.out.write_all(format_draft(&editor).as_bytes())?;
        self.mode = Mode::Editing(editor);
        Ok(())
    }

    /// Entry at a 1-based position of the current derived view
    fn entry_at(&self, number: usize) -> Result<JournalEntry> {
        number
            .checked_sub(1)
            .and_then(|index| self.store.filtered_and_sorted().into_iter().nth(index))
            .ok_or(JotbookError::NoSuchEntry(number))
    }

    fn render_list(&mut self) -> Result<()> {
        let view = self.store.filtered_and_sorted();
        self.out.write_all(format_entry_list(&view).as_bytes())?;
        self.stale.set(false);
        Ok(())
    }
}
