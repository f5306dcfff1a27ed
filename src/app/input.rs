use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::domain::ports::LineReader;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation;

/// Console prompts with the retry-until-valid loop: a correctable validation
/// error prints its message and asks again; anything else aborts the run.
pub struct InputView<R: LineReader> {
    reader: R,
}

impl<R: LineReader> InputView<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub async fn read_coach_names(&mut self) -> Result<Vec<String>> {
        loop {
            println!("코치의 이름을 입력해 주세요. (, 로 구분)");
            let line = self.reader.read_line().await?;

            match validation::parse_coach_names(&line) {
                Ok(names) => return Ok(names),
                Err(error) if error.is_user_correctable() => {
                    println!("{}", error.user_message())
                }
                Err(error) => return Err(error),
            }
        }
    }

    pub async fn read_banned_menus(&mut self, coach_name: &str) -> Result<Vec<String>> {
        loop {
            println!("{}(이)가 못 먹는 메뉴를 입력해 주세요.", coach_name);
            let line = self.reader.read_line().await?;

            match validation::parse_banned_menus(&line) {
                Ok(menus) => return Ok(menus),
                Err(error) if error.is_user_correctable() => {
                    println!("{}", error.user_message())
                }
                Err(error) => return Err(error),
            }
        }
    }
}

/// Stdin-backed reader used by the real CLI.
pub struct ConsoleReader {
    lines: Lines<BufReader<Stdin>>,
}

impl ConsoleReader {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for ConsoleReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineReader for ConsoleReader {
    async fn read_line(&mut self) -> Result<String> {
        match self.lines.next_line().await? {
            Some(line) => Ok(line),
            None => Err(MenuError::InputClosed),
        }
    }
}
