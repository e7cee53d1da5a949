//! Terminal prompt: line commands and the read-answer loop

use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use log::debug;

use crate::client::{
  Chatbot, Submission, EMPTY_QUERY_WARNING, EXAMPLE_QUERY, TAGLINE, TITLE
};

pub const EXAMPLE_COMMAND: &str = ":example";
pub const QUIT_COMMAND: &str = ":quit";

/// What one line typed at the prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command
{   /// Submit this text (may be blank)
    Ask(String)
  , Quit
}

impl Command
{   pub fn from_line(line: &str) -> Self
    {   match line.trim()
        {   QUIT_COMMAND => Command::Quit
          , EXAMPLE_COMMAND => Command::Ask(EXAMPLE_QUERY.to_string())
          , _ => Command::Ask(line.to_string())
        }
    }
}

/// Query passed as program arguments, joined with spaces
pub fn one_shot_query<I>(args: I) -> Option<String>
where
  I: IntoIterator<Item = String>
{   let args: Vec<String> = args.into_iter().collect();
    if args.is_empty()
    {   None
    } else
    {   Some(args.join(" "))
    }
}

/// Read queries from `input` until EOF or `:quit`
pub async fn run_prompt_loop<R, W>(
  bot: &Chatbot
, input: R
, out: &mut W
) -> std::io::Result<()>
where
  R: AsyncBufRead + Unpin
, W: Write
{   writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", TAGLINE)?;
    writeln!(
      out,
      "Example: {} (type {} to ask it, {} to leave)",
      EXAMPLE_QUERY, EXAMPLE_COMMAND, QUIT_COMMAND
    )?;

    let mut lines = input.lines();
    loop
    {   write!(out, "\nEnter your query: ")?;
        out.flush()?;

        let line = match lines.next_line().await?
        {   Some(line) => line
          , None => {
              debug!("Input closed");
              writeln!(out)?;
              break;
            }
        };

        match Command::from_line(&line)
        {   Command::Quit => break
          , Command::Ask(text) => answer(bot, &text, out).await?
        }
    }
    Ok(())
}

/// Submit one query and print the outcome
pub async fn answer<W: Write>(
  bot: &Chatbot
, input: &str
, out: &mut W
) -> std::io::Result<()>
{   if input.trim().is_empty()
    {   writeln!(out, "{}", EMPTY_QUERY_WARNING)?;
        return Ok(());
    }

    writeln!(out, "Thinking...")?;
    out.flush()?;
    match bot.submit(input).await
    {   Submission::Answered(Ok(text)) => {
          writeln!(out, "Response:")?;
          writeln!(out, "{}", text)?;
        }
      , other => writeln!(out, "{}", other.display_text())?
    }
    Ok(())
}
