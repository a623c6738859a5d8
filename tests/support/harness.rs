use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use course_manager::domain::Course;
use course_manager::input::LinePrompter;
use course_manager::repository::{CourseRepository, InMemoryCourseRepository};
use course_manager::session::Session;
use course_manager::ui::{Output, OutputMode};

/// Writer that keeps everything written to it for later inspection.
#[derive(Clone, Default)]
pub struct CaptureBuffer(Arc<Mutex<Vec<u8>>>);

impl CaptureBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Result of driving a session with scripted keyboard input.
pub struct SessionRun {
    pub store: InMemoryCourseRepository,
    pub output: String,
}

impl SessionRun {
    pub fn ids(&self) -> Vec<String> {
        self.store
            .list()
            .iter()
            .map(|c| c.id().to_string())
            .collect()
    }

    pub fn lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }
}

/// Builds a session, feeds it one line per entry and runs it to completion.
pub struct TestHarness {
    store: InMemoryCourseRepository,
    mode: OutputMode,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            store: InMemoryCourseRepository::new(),
            mode: OutputMode::Human,
        }
    }

    pub fn json(mut self) -> Self {
        self.mode = OutputMode::Json;
        self
    }

    pub fn with_course(mut self, id: &str, name: &str, credit: i64) -> Self {
        self.store
            .add(Course::new(id, name, credit).unwrap())
            .unwrap();
        self
    }

    pub fn run(self, input: &[&str]) -> SessionRun {
        let mut script = input.join("\n");
        script.push('\n');

        let buffer = CaptureBuffer::default();
        let output = Output::with_writer(self.mode, Box::new(buffer.clone()));
        let prompter = LinePrompter::new(Cursor::new(script.into_bytes()), output.clone());

        let mut session = Session::new(self.store, prompter, output);
        session.run().unwrap();

        SessionRun {
            store: session.into_store(),
            output: buffer.contents(),
        }
    }
}
