//! Whole-value assignment and payload lifetimes through the public API.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tola_result::{Err, Ok, Report, Result};

/// Payload that counts its own drops and clones.
struct Probe {
    name: &'static str,
    drops: Rc<Cell<usize>>,
    clones: Rc<Cell<usize>>,
}

impl Probe {
    fn new(name: &'static str, drops: &Rc<Cell<usize>>, clones: &Rc<Cell<usize>>) -> Self {
        Self {
            name,
            drops: Rc::clone(drops),
            clones: Rc::clone(clones),
        }
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self::new(self.name, &self.drops, &self.clones)
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl Report for Probe {
    fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn counters() -> (Rc<Cell<usize>>, Rc<Cell<usize>>) {
    (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
}

fn name_of(r: &Result<Probe, Probe>) -> (bool, &'static str) {
    match r.as_ref().into_std() {
        std::result::Result::Ok(p) => (true, p.name),
        std::result::Result::Err(p) => (false, p.name),
    }
}

#[test]
fn test_assign_across_states() {
    let (drops, clones) = counters();
    let mut r: Result<Probe, Probe> = Ok(Probe::new("a", &drops, &clones)).into();

    r.assign(Err(Probe::new("b", &drops, &clones)).into());
    assert_eq!(name_of(&r), (false, "b"));
    assert_eq!(drops.get(), 1);

    r.assign(Err(Probe::new("c", &drops, &clones)).into());
    assert_eq!(name_of(&r), (false, "c"));
    assert_eq!(drops.get(), 2);

    r.assign(Ok(Probe::new("d", &drops, &clones)).into());
    assert_eq!(name_of(&r), (true, "d"));
    assert_eq!(drops.get(), 3);

    r.assign(Ok(Probe::new("e", &drops, &clones)).into());
    assert_eq!(name_of(&r), (true, "e"));
    assert_eq!(drops.get(), 4);

    drop(r);
    assert_eq!(drops.get(), 5);
    assert_eq!(clones.get(), 0, "moves never clone");
}

#[test]
fn test_clone_from_across_states() {
    let (drops, clones) = counters();
    let source_ok: Result<Probe, Probe> = Ok(Probe::new("ok", &drops, &clones)).into();
    let source_err: Result<Probe, Probe> = Err(Probe::new("err", &drops, &clones)).into();
    let mut r: Result<Probe, Probe> = Err(Probe::new("start", &drops, &clones)).into();

    r.clone_from(&source_ok);
    assert_eq!(name_of(&r), (true, "ok"));
    r.clone_from(&source_ok);
    r.clone_from(&source_err);
    assert_eq!(name_of(&r), (false, "err"));
    r.clone_from(&source_err);

    assert_eq!(clones.get(), 4);
    assert_eq!(drops.get(), 4);
    assert_eq!(name_of(&source_ok), (true, "ok"));
    assert_eq!(name_of(&source_err), (false, "err"));
}

#[test]
fn test_clone_is_independent() {
    let original: Result<Vec<u32>, String> = Ok(vec![1, 2]).into();
    let mut copy = original.clone();
    if let Some(v) = copy.as_mut().into_ok() {
        v.push(3);
    }
    assert_eq!(original, Ok(vec![1u32, 2]));
    assert_eq!(copy, Ok(vec![1u32, 2, 3]));
}

#[test]
fn test_combinators_release_each_payload_once() {
    let (drops, clones) = counters();
    {
        let r: Result<Probe, Probe> = Err(Probe::new("e", &drops, &clones)).into();
        let mapped = r.map(|p| p.name.len());
        assert!(mapped.is_err());
        assert_eq!(drops.get(), 0);
        let recovered = mapped.or_else(|p| Result::<usize, u8>::from(Ok(p.name.len())));
        assert_eq!(drops.get(), 1);
        assert_eq!(recovered, Ok(1usize));
    }
    assert_eq!(drops.get(), 1);
    assert_eq!(clones.get(), 0);
}
