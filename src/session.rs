//! The interactive course menu.
//!
//! A [`Session`] ties a course store to a [`Prompter`] and an [`Output`]:
//! each menu choice acquires validated input, runs one store operation and
//! renders the outcome. Store rejections are displayed and the loop carries
//! on; only the exit choice (or end of input) ends the session.

use anyhow::Result;
use tracing::{debug, info};

use crate::domain::validation::{
    COURSE_ID_PATTERN, COURSE_NAME_PATTERN, CREDIT_PATTERN, MENU_PATTERN,
};
use crate::domain::Course;
use crate::input::{InputError, Prompter};
use crate::repository::CourseRepository;
use crate::ui::{format, Output};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    ListAll,
    FindById,
    Add,
    ListSorted,
    UpdateCredit,
}

impl MenuChoice {
    /// Menu entries in display order, paired with their number.
    pub const ALL: [(i64, MenuChoice, &'static str); 6] = [
        (1, MenuChoice::ListAll, "Display all courses"),
        (2, MenuChoice::FindById, "Find a course by id"),
        (3, MenuChoice::Add, "Add a course"),
        (4, MenuChoice::ListSorted, "Display courses sorted by credit"),
        (5, MenuChoice::UpdateCredit, "Update the credit of a course"),
        (0, MenuChoice::Exit, "Exit"),
    ];
}

impl From<i64> for MenuChoice {
    /// Any number other than 1-5 means exit.
    fn from(value: i64) -> Self {
        match value {
            1 => MenuChoice::ListAll,
            2 => MenuChoice::FindById,
            3 => MenuChoice::Add,
            4 => MenuChoice::ListSorted,
            5 => MenuChoice::UpdateCredit,
            _ => MenuChoice::Exit,
        }
    }
}

/// Whether the menu loop should keep going after a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<S, P> {
    store: S,
    prompter: P,
    output: Output,
}

impl<S: CourseRepository, P: Prompter> Session<S, P> {
    pub fn new(store: S, prompter: P, output: Output) -> Self {
        Self {
            store,
            prompter,
            output,
        }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Run the menu until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        info!(courses = self.store.len(), "course session started");
        loop {
            self.print_menu();
            let choice = match self
                .prompter
                .prompt_integer("Select your choice: ", MENU_PATTERN)
            {
                Ok(n) => MenuChoice::from(n),
                Err(InputError::Closed) => MenuChoice::Exit,
                Err(e) => return Err(e.into()),
            };

            if self.dispatch(choice)? == Flow::Exit {
                break;
            }
        }
        info!(courses = self.store.len(), "course session ended");
        Ok(())
    }

    /// Perform one menu action.
    ///
    /// Running out of input part-way through an action ends the session
    /// without touching the store.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!(?choice, "menu choice");
        let outcome = match choice {
            MenuChoice::Exit => {
                self.output.info("Exit program");
                return Ok(Flow::Exit);
            }
            MenuChoice::ListAll => {
                self.display_all();
                Ok(())
            }
            MenuChoice::FindById => self.display_course(),
            MenuChoice::Add => self.add_course(),
            MenuChoice::ListSorted => {
                self.display_sorted();
                Ok(())
            }
            MenuChoice::UpdateCredit => self.update_credit(),
        };

        match outcome {
            Ok(()) => Ok(Flow::Continue),
            Err(InputError::Closed) => {
                self.output.info("Exit program");
                Ok(Flow::Exit)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn print_menu(&self) {
        self.output.heading("Course Management");
        self.output.info(&format::separator(40));
        for (number, _, label) in MenuChoice::ALL {
            self.output.info(&format!("{}. {}", number, label));
        }
    }

    fn display_all(&self) {
        let courses = self.store.list();
        self.output.heading(format::LIST_HEADER);
        for course in &courses {
            self.output.course(&course.to_string(), course);
        }
    }

    fn display_course(&mut self) -> Result<(), InputError> {
        let id = self.prompter.prompt_string("Enter course id: ", COURSE_ID_PATTERN)?;
        match self.store.find_by_id(&id) {
            Some(course) => {
                self.output.heading(format::LIST_HEADER);
                self.output.course(&course.to_string(), &course);
            }
            None => self.output.warn("no course found"),
        }
        Ok(())
    }

    fn add_course(&mut self) -> Result<(), InputError> {
        let id = self.prompter.prompt_string("Enter course id: ", COURSE_ID_PATTERN)?;
        let name = self
            .prompter
            .prompt_string("Enter course name: ", COURSE_NAME_PATTERN)?;
        let credit = self
            .prompter
            .prompt_integer("Enter course credit: ", CREDIT_PATTERN)?;

        match Course::new(id, name, credit).and_then(|course| self.store.add(course)) {
            Ok(()) => self.output.success("Information of course has been added"),
            Err(e) => self.output.error(&e.to_string()),
        }
        Ok(())
    }

    fn display_sorted(&self) {
        let courses = self.store.sort();
        self.output.heading(format::SORTED_HEADER);
        for (index, course) in courses.iter().enumerate() {
            self.output
                .course(&format::numbered_row(index, course), course);
        }
    }

    fn update_credit(&mut self) -> Result<(), InputError> {
        let id = self.prompter.prompt_string("Course id: ", COURSE_ID_PATTERN)?;
        let credit = self.prompter.prompt_integer("Credit: ", CREDIT_PATTERN)?;

        match self.store.update_credit(&id, credit) {
            Ok(()) => self
                .output
                .success(&format!("Credit of course {} has been updated", id)),
            Err(e) => self.output.error(&e.to_string()),
        }
        Ok(())
    }
}
