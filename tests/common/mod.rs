//! Shared test infrastructure for debounced-io integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use debounced_io::{DigitalInput, DigitalOutput, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }

    pub fn now_millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock GPIO
// ============================================================================

/// Simulated GPIO line, shared between the test and the pin handle the
/// component under test owns.
pub struct MockLine {
    level: Cell<bool>,
    configured_input: Cell<bool>,
    configured_output: Cell<bool>,
    reads: Cell<u32>,
    write_history: RefCell<heapless::Vec<bool, 32>>,
}

impl MockLine {
    pub fn new(level: bool) -> Self {
        Self {
            level: Cell::new(level),
            configured_input: Cell::new(false),
            configured_output: Cell::new(false),
            reads: Cell::new(0),
            write_history: RefCell::new(heapless::Vec::new()),
        }
    }

    /// Handle to pass into the component under test
    pub fn pin(&self) -> MockPin<'_> {
        MockPin { line: self }
    }

    /// Drive the electrical level (simulates the button contact)
    pub fn set_level(&self, level: bool) {
        self.level.set(level);
    }

    pub fn level(&self) -> bool {
        self.level.get()
    }

    pub fn is_configured_input(&self) -> bool {
        self.configured_input.get()
    }

    pub fn is_configured_output(&self) -> bool {
        self.configured_output.get()
    }

    pub fn read_count(&self) -> u32 {
        self.reads.get()
    }

    pub fn write_history(&self) -> heapless::Vec<bool, 32> {
        self.write_history.borrow().clone()
    }
}

pub struct MockPin<'a> {
    line: &'a MockLine,
}

impl DigitalInput for MockPin<'_> {
    fn configure_as_input(&mut self) {
        self.line.configured_input.set(true);
    }

    fn read_level(&mut self) -> bool {
        self.line.reads.set(self.line.reads.get() + 1);
        self.line.level.get()
    }
}

impl DigitalOutput for MockPin<'_> {
    fn configure_as_output(&mut self) {
        self.line.configured_output.set(true);
    }

    fn write_level(&mut self, high: bool) {
        self.line.level.set(high);
        let _ = self.line.write_history.borrow_mut().push(high);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Deterministic xorshift generator for randomized poll sequences
pub struct XorShift(pub u32);

impl XorShift {
    pub fn next(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    pub fn next_bool(&mut self) -> bool {
        self.next() & 1 == 1
    }
}
