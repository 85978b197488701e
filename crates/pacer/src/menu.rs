use std::io::{self, BufRead, Write};

use console::style;
use pacer_progress::Renderer;
use tracing::debug;

use crate::demo::{Demo, advanced, basic};

pub const GOODBYE: &str = "\nGoodbye! 👋";

pub const INTERRUPTED: &str = "\n\nInterrupted by user. Goodbye! 👋";

const MENU_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Basic,
    Advanced,
    All,
    Quit,
    Invalid,
}

impl Choice {
    /// Reads a menu token, ignoring surrounding whitespace and case.
    pub fn parse(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "1" => Choice::Basic,
            "2" => Choice::Advanced,
            "3" => Choice::All,
            "q" => Choice::Quit,
            _ => Choice::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingChoice,
    RunningBasic,
    RunningAdvanced,
    RunningAll,
    Exiting,
}

impl MenuState {
    /// The state a choice leads to from `AwaitingChoice`.
    pub fn on(choice: Choice) -> Self {
        match choice {
            Choice::Basic => MenuState::RunningBasic,
            Choice::Advanced => MenuState::RunningAdvanced,
            Choice::All => MenuState::RunningAll,
            Choice::Quit => MenuState::Exiting,
            Choice::Invalid => MenuState::AwaitingChoice,
        }
    }
}

pub struct Menu<'a, R: Renderer, In: BufRead, Out: Write> {
    demo: Demo<'a, R>,
    input: In,
    output: Out,
    state: MenuState,
}

impl<'a, R: Renderer, In: BufRead, Out: Write> Menu<'a, R, In, Out> {
    pub fn new(demo: Demo<'a, R>, input: In, output: Out) -> Self {
        Self {
            demo,
            input,
            output,
            state: MenuState::AwaitingChoice,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    #[cfg(test)]
    pub fn into_output(self) -> Out {
        self.output
    }

    /// Cycles until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        while self.state() != MenuState::Exiting {
            self.cycle()?;
        }
        Ok(())
    }

    /// One prompt and exactly one of: a demo run, exiting, or an error line.
    pub fn cycle(&mut self) -> io::Result<MenuState> {
        self.print_menu()?;
        write!(self.output, "\nYour choice: ")?;
        self.output.flush()?;

        // Raw bytes: a line that is not UTF-8 is just another invalid token.
        let mut line = Vec::new();
        let choice = if self.input.read_until(b'\n', &mut line)? == 0 {
            debug!("input closed");
            Choice::Quit
        } else {
            Choice::parse(&String::from_utf8_lossy(&line))
        };
        debug!(?choice, "menu choice");

        self.state = MenuState::on(choice);
        match self.state {
            MenuState::RunningBasic => basic::run(&self.demo),
            MenuState::RunningAdvanced => advanced::run(&self.demo),
            MenuState::RunningAll => self.run_all(),
            MenuState::Exiting => writeln!(self.output, "{GOODBYE}")?,
            MenuState::AwaitingChoice => writeln!(
                self.output,
                "\n{}",
                style("❌ Invalid choice. Please try again.").red()
            )?,
        }

        if self.state != MenuState::Exiting {
            self.state = MenuState::AwaitingChoice;
        }
        Ok(self.state)
    }

    fn run_all(&self) {
        self.demo.line(&format!("\n{}", "🚀".repeat(30)));
        self.demo.line("Running ALL demos...");
        self.demo.line(&"🚀".repeat(30));

        basic::run(&self.demo);
        advanced::run(&self.demo);

        self.demo.line(&format!("\n{}", "✅".repeat(30)));
        self.demo.line("All demos finished!");
        self.demo.line(&"✅".repeat(30));
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(MENU_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "{}", style("Pacer Demo Suite").bold())?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "\nChoose a demo to run:")?;
        writeln!(self.output, "  1. Basic demos (simple loops, nested bars)")?;
        writeln!(self.output, "  2. Advanced demos (file processing, downloads, custom formats)")?;
        writeln!(self.output, "  3. Run all demos")?;
        writeln!(self.output, "  q. Quit")?;
        writeln!(self.output, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pace::Pace;
    use pacer_progress::Recorder;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn menu<'a>(recorder: &'a Recorder, input: &str) -> Menu<'a, Recorder, Cursor<Vec<u8>>, Vec<u8>> {
        menu_bytes(recorder, input.as_bytes())
    }

    fn menu_bytes<'a>(recorder: &'a Recorder, input: &[u8]) -> Menu<'a, Recorder, Cursor<Vec<u8>>, Vec<u8>> {
        let demo = Demo::new(recorder, Pace::instant());
        Menu::new(demo, Cursor::new(input.to_vec()), Vec::new())
    }

    fn output(menu: Menu<'_, Recorder, Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(menu.into_output()).unwrap()
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(Choice::parse("1\n"), Choice::Basic);
        assert_eq!(Choice::parse(" 2 "), Choice::Advanced);
        assert_eq!(Choice::parse("3"), Choice::All);
        assert_eq!(Choice::parse("q"), Choice::Quit);
        assert_eq!(Choice::parse("Q\r\n"), Choice::Quit);
        assert_eq!(Choice::parse(""), Choice::Invalid);
        assert_eq!(Choice::parse("12"), Choice::Invalid);
    }

    #[test]
    fn test_invalid_choice_reprompts_without_demo_output() {
        let recorder = Recorder::new();
        let mut menu = menu(&recorder, "x\n");

        assert_eq!(menu.cycle().unwrap(), MenuState::AwaitingChoice);
        assert!(recorder.is_empty());
        assert!(output(menu).contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_quit_exits() {
        for token in ["q\n", "Q\n"] {
            let recorder = Recorder::new();
            let mut menu = menu(&recorder, token);
            menu.run().unwrap();
            assert_eq!(menu.state(), MenuState::Exiting);
            assert!(recorder.is_empty());
            assert!(output(menu).ends_with("Goodbye! 👋\n"));
        }
    }

    #[test]
    fn test_quit_after_demos() {
        let recorder = Recorder::new();
        let mut menu = menu(&recorder, "1\nbad\n2\nQ\n");
        menu.run().unwrap();
        assert_eq!(menu.state(), MenuState::Exiting);
        assert!(recorder.find("Manual updates").is_some());
        assert!(recorder.find("Training").is_some());
    }

    #[test]
    fn test_basic_returns_to_awaiting() {
        let recorder = Recorder::new();
        let mut menu = menu(&recorder, "1\n");
        assert_eq!(menu.cycle().unwrap(), MenuState::AwaitingChoice);
        assert!(recorder.find("Outer loop").is_some());
        assert!(recorder.find("Downloading").is_none());
    }

    #[test]
    fn test_run_all_runs_both_with_banners() {
        let recorder = Recorder::new();
        let mut menu = menu(&recorder, "3\n");
        assert_eq!(menu.cycle().unwrap(), MenuState::AwaitingChoice);

        let lines = recorder.lines();
        assert_eq!(lines[1], "Running ALL demos...");
        assert_eq!(lines[lines.len() - 2], "All demos finished!");
        assert!(recorder.find("Processing").is_some());
        assert!(recorder.find("Downloading").is_some());
    }

    #[test]
    fn test_end_of_input_exits() {
        let recorder = Recorder::new();
        let mut menu = menu(&recorder, "");
        menu.run().unwrap();
        assert_eq!(menu.state(), MenuState::Exiting);
    }

    #[test]
    fn test_non_utf8_line_is_invalid_choice() {
        let recorder = Recorder::new();
        let mut menu = menu_bytes(&recorder, b"\xff\nq\n");

        assert_eq!(menu.cycle().unwrap(), MenuState::AwaitingChoice);
        menu.run().unwrap();
        assert_eq!(menu.state(), MenuState::Exiting);
        assert!(recorder.is_empty());

        let output = output(menu);
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.ends_with("Goodbye! 👋\n"));
    }

    #[test]
    fn test_interrupt_message() {
        assert!(INTERRUPTED.starts_with("\n\n"));
        assert!(INTERRUPTED.ends_with("Goodbye! 👋"));
    }

    proptest! {
        #[test]
        fn prop_unknown_tokens_are_invalid(token in "[^\r\n]*") {
            let known = ["1", "2", "3", "q"];
            prop_assume!(!known.contains(&token.trim().to_lowercase().as_str()));

            let recorder = Recorder::new();
            let mut menu = menu(&recorder, &format!("{token}\n"));
            prop_assert_eq!(menu.cycle().unwrap(), MenuState::AwaitingChoice);
            prop_assert!(recorder.is_empty());
        }
    }
}
