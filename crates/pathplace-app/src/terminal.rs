//! 终端问答
//!
//! 宿主的文本输入框：读取一行回答，EOF 视为取消。

use std::io::{BufRead, Write};

/// 基于行的终端输入输出
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 输出一行文本
    pub fn say(&mut self, text: &str) {
        // 终端不可写时没有其他途径报告
        writeln!(self.output, "{}", text).ok();
    }

    /// 提问并读取一行回答（去掉行尾换行），EOF 或读取失败返回 `None`
    pub fn ask(&mut self, question: &str, default: &str) -> Option<String> {
        if default.is_empty() {
            write!(self.output, "{}: ", question).ok();
        } else {
            write!(self.output, "{} [{}]: ", question, default).ok();
        }
        self.output.flush().ok();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::error!("Failed to read answer: {}", e);
                None
            }
        }
    }

    /// 从列表中选择一项，返回从 0 开始的序号
    ///
    /// 空回答选择 `default`，无效回答重新提问。
    pub fn choose(&mut self, question: &str, items: &[String], default: usize) -> Option<usize> {
        if items.is_empty() {
            return None;
        }

        for (i, item) in items.iter().enumerate() {
            self.say(&format!("  {:>3}) {}", i + 1, item));
        }

        let default = default.min(items.len() - 1);
        loop {
            let answer = self.ask(question, &(default + 1).to_string())?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Some(default);
            }

            match answer.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Some(n - 1),
                _ => self.say(&format!("Please enter a number between 1 and {}.", items.len())),
            }
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}
