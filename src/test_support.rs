use crate::completion::CompletionClient;
use crate::error::{Result, SqlPromptError};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

enum Script {
    Echo,
    Replies(RefCell<VecDeque<String>>),
    FailingAt { call: usize, message: String },
}

/// In-memory completion client that records every prompt it receives.
pub(crate) struct ScriptedClient {
    script: Script,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedClient {
    /// Answers every prompt with the prompt itself.
    pub(crate) fn echo() -> Self {
        Self::new(Script::Echo)
    }

    /// Answers with the given replies in order; fails once they run out.
    pub(crate) fn replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let queue = replies.into_iter().map(Into::into).collect();
        Self::new(Script::Replies(RefCell::new(queue)))
    }

    /// Echoes until the `call`-th request (1-based), which fails with `message`.
    pub(crate) fn failing_at(call: usize, message: &str) -> Self {
        Self::new(Script::FailingAt {
            call,
            message: message.to_string(),
        })
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl CompletionClient for ScriptedClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        let call = self.prompts.borrow().len();

        match &self.script {
            Script::Echo => Ok(prompt.to_string()),
            Script::Replies(queue) => queue.borrow_mut().pop_front().ok_or_else(|| {
                SqlPromptError::CompletionError("scripted replies exhausted".to_string())
            }),
            Script::FailingAt { call: failing, message } if *failing == call => {
                Err(SqlPromptError::CompletionError(message.clone()))
            }
            Script::FailingAt { .. } => Ok(prompt.to_string()),
        }
    }
}

/// Write `content` to `name` inside `dir` and return its path.
pub(crate) fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
