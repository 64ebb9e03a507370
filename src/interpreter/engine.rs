// Execution engine for the robot interpreter

use crate::interpreter::constants::{DEFAULT_MAX_STEPS, DEFAULT_SNAPSHOT_MEMORY};
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::*;
use crate::robot::{trail::Trail, Position, Robot};
use crate::snapshot::{LogLine, MoveLog, Snapshot, SnapshotManager};

/// Bounds on a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of primitives executed
    pub max_steps: u64,
    /// Snapshot history budget in bytes
    pub snapshot_memory: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_steps: DEFAULT_MAX_STEPS,
            snapshot_memory: DEFAULT_SNAPSHOT_MEMORY,
        }
    }
}

/// The main interpreter that executes a robot program
pub struct Interpreter {
    /// Parsed program
    program: Program,

    /// Robot state at the current history position
    robot: Robot,

    /// Full trail recorded so far; only a prefix is visible when stepping back
    trail: Trail,
    trail_len: usize,

    /// Full move log recorded so far; same prefix rule as the trail
    log: MoveLog,
    log_len: usize,

    /// Location of the command that produced the current state
    current_location: SourceLocation,

    /// Primitive that produced the current state (None before the first step)
    current_command: Option<Primitive>,

    /// Snapshot manager for reverse execution
    snapshot_manager: SnapshotManager,

    /// Index of the snapshot currently shown
    history_position: usize,

    /// Primitives executed so far during `run`
    steps: u64,

    limits: Limits,

    /// Whether execution ran to completion
    finished: bool,
}

impl Interpreter {
    /// Create a new interpreter with the parsed program
    pub fn new(program: Program, limits: Limits) -> Self {
        let location = program.location;
        Interpreter {
            program,
            robot: Robot::new(),
            trail: Trail::new(),
            trail_len: 1,
            log: MoveLog::new(),
            log_len: 0,
            current_location: location,
            current_command: None,
            snapshot_manager: SnapshotManager::new(limits.snapshot_memory),
            history_position: 0,
            steps: 0,
            limits,
            finished: false,
        }
    }

    /// Run the program from start to finish, recording a snapshot per primitive
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        if !self.snapshot_manager.is_empty() {
            return Err(RuntimeError::HistoryOperationFailed {
                message: "Program has already been run".to_string(),
            });
        }

        // Take initial snapshot
        self.take_snapshot()?;

        let body = std::mem::take(&mut self.program.body);
        let result = self.execute_list(&body);
        self.program.body = body;
        result?;

        self.finished = true;
        Ok(())
    }

    fn execute_list(&mut self, list: &CommandList) -> Result<(), RuntimeError> {
        for cmd in &list.commands {
            self.execute_command(cmd)?;
        }
        Ok(())
    }

    fn execute_command(&mut self, cmd: &Command) -> Result<(), RuntimeError> {
        match cmd {
            Command::Repeat { count, body, .. } => {
                if *count == 0 {
                    return Ok(());
                }
                let steps_before = self.steps;
                self.execute_list(body)?;
                // A body that never moves or turns would spin without touching the step limit
                if self.steps == steps_before {
                    return Ok(());
                }
                for _ in 1..*count {
                    self.execute_list(body)?;
                }
                Ok(())
            }
            Command::Primitive { action, location } => self.execute_primitive(*action, *location),
        }
    }

    fn execute_primitive(
        &mut self,
        action: Primitive,
        location: SourceLocation,
    ) -> Result<(), RuntimeError> {
        if self.steps >= self.limits.max_steps {
            return Err(RuntimeError::StepLimitExceeded {
                limit: self.limits.max_steps,
                location,
            });
        }

        self.current_location = location;
        self.current_command = Some(action);
        self.steps += 1;

        if self.robot.apply(action) {
            self.trail.push(self.robot.position);
        }
        self.log.record(
            format!("{:>4}  {:<5} -> {}", self.steps, action, self.robot),
            location,
        );
        self.trail_len = self.trail.len();
        self.log_len = self.log.len();

        if let Err(err) = self.take_snapshot() {
            self.discard_unrecorded_step();
            return Err(err);
        }
        Ok(())
    }

    /// Drop state produced after the last snapshot so the current state stays reachable from history
    fn discard_unrecorded_step(&mut self) {
        if let Some(snapshot) = self.snapshot_manager.last().cloned() {
            self.restore_snapshot(&snapshot);
            self.trail.truncate(snapshot.trail_len);
            self.log.truncate(snapshot.log_len);
            self.steps = snapshot.step as u64;
        }
    }

    /// Take a snapshot of the current execution state
    fn take_snapshot(&mut self) -> Result<(), RuntimeError> {
        let snapshot = Snapshot {
            robot: self.robot,
            step: self.steps as usize,
            trail_len: self.trail_len,
            log_len: self.log_len,
            source_location: self.current_location,
            command: self.current_command,
        };

        self.snapshot_manager
            .push(snapshot)
            .map_err(|_| RuntimeError::SnapshotLimitExceeded {
                current: self.snapshot_manager.memory_usage(),
                limit: self.snapshot_manager.memory_limit(),
            })?;

        self.history_position = self.snapshot_manager.len() - 1;
        Ok(())
    }

    /// Restore execution state from a snapshot
    fn restore_snapshot(&mut self, snapshot: &Snapshot) {
        self.robot = snapshot.robot;
        self.trail_len = snapshot.trail_len;
        self.log_len = snapshot.log_len;
        self.current_location = snapshot.source_location;
        self.current_command = snapshot.command;
    }

    /// Move to the snapshot at `index`
    fn seek(&mut self, index: usize) -> Result<(), RuntimeError> {
        match self.snapshot_manager.get(index).cloned() {
            Some(snapshot) => {
                self.restore_snapshot(&snapshot);
                self.history_position = index;
                Ok(())
            }
            None => Err(RuntimeError::HistoryOperationFailed {
                message: format!("Snapshot {} not found in history", index),
            }),
        }
    }

    /// Step backward in execution (restore previous snapshot)
    pub fn step_backward(&mut self) -> Result<(), RuntimeError> {
        if self.history_position == 0 {
            return Err(RuntimeError::HistoryOperationFailed {
                message: "Already at the beginning of execution".to_string(),
            });
        }
        self.seek(self.history_position - 1)
    }

    /// Step forward in execution (restore next snapshot)
    pub fn step_forward(&mut self) -> Result<(), RuntimeError> {
        if self.history_position + 1 >= self.snapshot_manager.len() {
            return Err(RuntimeError::HistoryOperationFailed {
                message: "No more snapshots available (execution finished)".to_string(),
            });
        }
        self.seek(self.history_position + 1)
    }

    /// Rewind to the beginning of execution history
    pub fn rewind_to_start(&mut self) -> Result<(), RuntimeError> {
        if self.snapshot_manager.is_empty() {
            return Err(RuntimeError::HistoryOperationFailed {
                message: "No snapshots available".to_string(),
            });
        }
        self.seek(0)
    }

    /// Jump to the last recorded snapshot
    pub fn jump_to_end(&mut self) -> Result<(), RuntimeError> {
        match self.snapshot_manager.len() {
            0 => Err(RuntimeError::HistoryOperationFailed {
                message: "No snapshots available".to_string(),
            }),
            len => self.seek(len - 1),
        }
    }

    // ========== Getter methods for UI ==========

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Cells visited up to the current history position
    pub fn trail(&self) -> &[Position] {
        self.trail.prefix(self.trail_len)
    }

    /// Move log up to the current history position
    pub fn log(&self) -> &[LogLine] {
        &self.log.lines[..self.log_len]
    }

    pub fn current_location(&self) -> SourceLocation {
        self.current_location
    }

    pub fn current_command(&self) -> Option<Primitive> {
        self.current_command
    }

    /// Primitives executed up to the current history position
    pub fn steps_taken(&self) -> usize {
        self.snapshot_manager
            .get(self.history_position)
            .map(|s| s.step)
            .unwrap_or(0)
    }

    pub fn history_position(&self) -> usize {
        self.history_position
    }

    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Run `program` to completion and return the final robot state.
pub fn execute(program: Program, limits: Limits) -> Result<Robot, RuntimeError> {
    let mut interpreter = Interpreter::new(program, limits);
    interpreter.run()?;
    Ok(*interpreter.robot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::robot::Heading;

    fn run(source: &str) -> Interpreter {
        let program = parse(source).unwrap();
        let mut interpreter = Interpreter::new(program, Limits::default());
        interpreter.run().unwrap();
        interpreter
    }

    #[test]
    fn test_square_returns_to_origin() {
        let interpreter = run("program repeat 4 go right end end");
        assert!(interpreter.is_finished());
        assert_eq!(*interpreter.robot(), Robot::new());
        assert_eq!(interpreter.steps_taken(), 8);
        assert_eq!(interpreter.total_snapshots(), 9);
        assert_eq!(interpreter.trail().len(), 5);
        assert_eq!(interpreter.log().len(), 8);
    }

    #[test]
    fn test_zero_repeat_does_not_move() {
        let interpreter = run("program repeat 0 go end end");
        assert_eq!(*interpreter.robot(), Robot::new());
        assert_eq!(interpreter.total_snapshots(), 1);
        assert!(interpreter.log().is_empty());
    }

    #[test]
    fn test_step_backward_restores_state() {
        let mut interpreter = run("program go go right go end");
        assert_eq!(interpreter.robot().position, Position::new(1, 2));

        interpreter.step_backward().unwrap();
        assert_eq!(interpreter.robot().position, Position::new(0, 2));
        assert_eq!(interpreter.robot().heading, Heading::East);
        assert_eq!(interpreter.current_command(), Some(Primitive::Right));
        assert_eq!(interpreter.trail().len(), 3);
        assert_eq!(interpreter.log().len(), 3);

        interpreter.rewind_to_start().unwrap();
        assert_eq!(*interpreter.robot(), Robot::new());
        assert_eq!(interpreter.current_command(), None);
        assert!(interpreter.step_backward().is_err());

        interpreter.step_forward().unwrap();
        assert_eq!(interpreter.robot().position, Position::new(0, 1));
        assert_eq!(interpreter.current_location(), SourceLocation::new(1, 9));

        interpreter.jump_to_end().unwrap();
        assert_eq!(interpreter.robot().position, Position::new(1, 2));
        assert!(interpreter.step_forward().is_err());
    }

    #[test]
    fn test_step_limit() {
        let program = parse("program repeat 10 go end end").unwrap();
        let limits = Limits {
            max_steps: 3,
            ..Limits::default()
        };
        let mut interpreter = Interpreter::new(program, limits);
        match interpreter.run() {
            Err(RuntimeError::StepLimitExceeded { limit, location }) => {
                assert_eq!(limit, 3);
                assert_eq!(location, SourceLocation::new(1, 19));
            }
            other => panic!("Expected StepLimitExceeded, got {:?}", other),
        }
        // Partial history is kept
        assert!(!interpreter.is_finished());
        assert_eq!(interpreter.total_snapshots(), 4);
        assert_eq!(interpreter.robot().position, Position::new(0, 3));
    }

    #[test]
    fn test_huge_repeat_of_nothing_terminates() {
        let interpreter = run("program repeat 4294967295 repeat 4294967295 end end go end");
        assert_eq!(interpreter.robot().position, Position::new(0, 1));
    }

    #[test]
    fn test_deep_single_repeats_inside_large_count() {
        let depth = 300;
        let source = format!(
            "program repeat 5000 {}go {}end end",
            "repeat 1 ".repeat(depth),
            "end ".repeat(depth)
        );
        let interpreter = run(&source);
        assert_eq!(interpreter.robot().position, Position::new(0, 5000));
        assert_eq!(interpreter.steps_taken(), 5000);
    }

    #[test]
    fn test_repeat_of_empty_body_after_moves() {
        let interpreter = run("program repeat 3 go repeat 4294967295 repeat 0 go end end end end");
        assert_eq!(interpreter.robot().position, Position::new(0, 3));
    }

    #[test]
    fn test_snapshot_limit_rolls_back_unrecorded_step() {
        let program = parse("program repeat 100 go end end").unwrap();
        let size = std::mem::size_of::<Snapshot>();
        let limits = Limits {
            snapshot_memory: size * 4,
            ..Limits::default()
        };
        let mut interpreter = Interpreter::new(program, limits);
        assert!(matches!(
            interpreter.run(),
            Err(RuntimeError::SnapshotLimitExceeded { .. })
        ));

        assert_eq!(interpreter.total_snapshots(), 4);
        assert_eq!(interpreter.steps_taken(), 3);
        assert_eq!(interpreter.log().len(), 3);
        assert_eq!(interpreter.trail().len(), 4);
        assert_eq!(interpreter.robot().position, Position::new(0, 3));

        interpreter.rewind_to_start().unwrap();
        interpreter.jump_to_end().unwrap();
        assert_eq!(interpreter.log().len(), 3);
        assert_eq!(interpreter.robot().position, Position::new(0, 3));
    }

    #[test]
    fn test_run_twice_is_rejected() {
        let mut interpreter = run("program go end");
        assert!(matches!(
            interpreter.run(),
            Err(RuntimeError::HistoryOperationFailed { .. })
        ));
    }

    #[test]
    fn test_execute_convenience() {
        let program = parse("program left go go end").unwrap();
        let robot = execute(program, Limits::default()).unwrap();
        assert_eq!(robot.position, Position::new(-2, 0));
        assert_eq!(robot.heading, Heading::West);
    }
}
