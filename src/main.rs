use tokio::io::BufReader;
use log::{error, info};

use medichat::prompt::{answer, one_shot_query, run_prompt_loop};
use medichat::{Chatbot, ChatbotConfig};

#[tokio::main]
async fn main()
{   env_logger::init();

    let bot = match ChatbotConfig::from_env()
      .and_then(Chatbot::new)
    {   Ok(bot) => bot
      , Err(e) => {
          error!("Startup failed: {}", e);
          eprintln!("{}", e);
          std::process::exit(1);
        }
    };
    info!("Chatbot ready: {:?}", bot.config());

    let mut stdout = std::io::stdout();
    let result = match one_shot_query(std::env::args().skip(1))
    {   Some(query) => answer(&bot, &query, &mut stdout).await
      , None => {
          let stdin = BufReader::new(tokio::io::stdin());
          run_prompt_loop(&bot, stdin, &mut stdout).await
        }
    };

    if let Err(e) = result
    {   error!("Terminal I/O error: {}", e);
        eprintln!("Terminal I/O failed: {}", e);
        std::process::exit(1);
    }
}
