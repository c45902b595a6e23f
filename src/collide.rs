//! Iterative collision relaxation.
//!
//! A fixed-point relaxation over the placed entries, exposed as an
//! explicit stepper so the caller (an animation loop, a test, or a
//! one-shot batch run) decides the pacing. Each step applies pairwise
//! repulsion between nearby entries, damps the accumulated velocity
//! hard, integrates, and then re-clamps every entry into its own
//! segment. The re-clamp is mandatory on every step: no entry is ever
//! observable outside its cell, even transiently.

use glam::{DVec2, dvec2};

use crate::defaults::{
    COLLISION_RADIUS, COLLISION_STRENGTH, CONVERGENCE_EPSILON, MAX_STEPS, VELOCITY_RETAIN,
};
use crate::place::Entry;

/// Relaxation stepper owning the entries for the duration of the run.
///
/// Positions mutate in place across steps; everything else on an entry
/// is read-only here. Pairs are visited in entry order, so a given
/// starting state always relaxes to the same result.
#[derive(Debug)]
pub struct Relaxation {
    entries: Vec<Entry>,
    velocities: Vec<DVec2>,
    steps_taken: usize,
}

impl Relaxation {
    pub fn new(entries: Vec<Entry>) -> Relaxation {
        let velocities = vec![DVec2::ZERO; entries.len()];
        Relaxation {
            entries,
            velocities,
            steps_taken: 0,
        }
    }

    /// Current entry snapshot.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Steps applied so far.
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Apply one relaxation step. Returns the summed speed of all
    /// entries after the step; a value below [`CONVERGENCE_EPSILON`]
    /// means the system has settled.
    pub fn step(&mut self) -> f64 {
        // Damp first so each step's repulsion dominates what is left of
        // the last one.
        for v in &mut self.velocities {
            *v *= VELOCITY_RETAIN;
        }

        // Pairwise repulsion. Entries farther apart than the collision
        // radius exert no force; coincident entries get a fixed nudge
        // apart to stay deterministic.
        for i in 0..self.entries.len() {
            for j in (i + 1)..self.entries.len() {
                let delta = self.entries[j].position - self.entries[i].position;
                let dist = delta.length();
                if dist >= COLLISION_RADIUS {
                    continue;
                }
                let push = if dist > 0.0 {
                    delta / dist * (COLLISION_RADIUS - dist) * COLLISION_STRENGTH * 0.5
                } else {
                    dvec2(COLLISION_RADIUS * COLLISION_STRENGTH * 0.5, 0.0)
                };
                self.velocities[i] -= push;
                self.velocities[j] += push;
            }
        }

        // Integrate, then pull every entry back into its cell.
        let mut total_speed = 0.0;
        for (entry, velocity) in self.entries.iter_mut().zip(&self.velocities) {
            entry.position = entry.segment.clamp(entry.position + *velocity);
            debug_assert!(
                entry.segment.contains(entry.position, 1e-6),
                "entry {:?} escaped its segment",
                entry.id,
            );
            total_speed += velocity.length();
        }

        self.steps_taken += 1;
        total_speed
    }

    /// Whether a `step` result means the system has settled.
    pub fn converged(speed: f64) -> bool {
        speed < CONVERGENCE_EPSILON
    }

    /// Run up to `max_steps` steps, stopping early on convergence, and
    /// publish the entry snapshot to `on_step` after every step. Budget
    /// exhaustion leaves a partially relaxed (still legal) layout; it is
    /// not an error.
    pub fn run(&mut self, max_steps: usize, mut on_step: impl FnMut(&[Entry])) {
        for _ in 0..max_steps {
            let speed = self.step();
            on_step(&self.entries);
            if Self::converged(speed) {
                crate::log::debug!(steps = self.steps_taken, "relaxation converged");
                break;
            }
        }
    }

    /// Run with the default step budget and no callback.
    pub fn settle(&mut self) {
        self.run(MAX_STEPS, |_| {});
    }

    /// Give the entries back once stepping is done.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Color;
    use crate::segment::Segment;

    fn entry_at(id: &str, q: usize, r: usize, position: DVec2) -> Entry {
        let segment = Segment::new(q, r);
        Entry {
            label: id.to_string(),
            quadrant: q,
            ring: r,
            segment,
            position: segment.clamp(position),
            id: id.to_string(),
            color: Color::named("black"),
            active: true,
            moved: 0,
            link: None,
        }
    }

    #[test]
    fn distant_entries_do_not_move() {
        let entries = vec![
            entry_at("1", 0, 2, dvec2(200.0, 120.0)),
            entry_at("2", 0, 2, dvec2(120.0, 200.0)),
        ];
        let before: Vec<DVec2> = entries.iter().map(|e| e.position).collect();
        let mut relax = Relaxation::new(entries);
        let speed = relax.step();
        assert!(Relaxation::converged(speed));
        for (entry, old) in relax.entries().iter().zip(before) {
            assert!((entry.position - old).length() < 1e-9);
        }
    }

    #[test]
    fn overlapping_entries_separate() {
        let entries = vec![
            entry_at("1", 0, 1, dvec2(120.0, 80.0)),
            entry_at("2", 0, 1, dvec2(123.0, 82.0)),
        ];
        let mut relax = Relaxation::new(entries);
        relax.settle();
        let e = relax.entries();
        let dist = (e[0].position - e[1].position).length();
        assert!(
            dist >= COLLISION_RADIUS - 0.5,
            "entries still overlap: {dist}"
        );
    }

    #[test]
    fn coincident_entries_separate_deterministically() {
        let make = || {
            vec![
                entry_at("1", 1, 1, dvec2(-120.0, 80.0)),
                entry_at("2", 1, 1, dvec2(-120.0, 80.0)),
            ]
        };
        let mut a = Relaxation::new(make());
        let mut b = Relaxation::new(make());
        a.settle();
        b.settle();
        for (x, y) in a.entries().iter().zip(b.entries()) {
            assert_eq!(x.position.to_array(), y.position.to_array());
        }
        let e = a.entries();
        assert!((e[0].position - e[1].position).length() > 1.0);
    }

    #[test]
    fn every_step_keeps_entries_in_their_cells() {
        let mut entries = Vec::new();
        // Crowd one small cell to force sustained collisions.
        for i in 0..8 {
            entries.push(entry_at(
                &format!("{i}"),
                3,
                0,
                dvec2(50.0 + i as f64, -60.0),
            ));
        }
        let mut relax = Relaxation::new(entries);
        for _ in 0..60 {
            relax.step();
            for entry in relax.entries() {
                assert!(
                    entry.segment.contains(entry.position, 1e-6),
                    "entry {} left its segment at step {}",
                    entry.id,
                    relax.steps_taken(),
                );
            }
        }
    }

    #[test]
    fn run_invokes_callback_each_step_and_stops_on_convergence() {
        let entries = vec![entry_at("1", 0, 3, dvec2(300.0, 150.0))];
        let mut relax = Relaxation::new(entries);
        let mut calls = 0;
        relax.run(50, |snapshot| {
            assert_eq!(snapshot.len(), 1);
            calls += 1;
        });
        // A single entry feels no force; one step settles it.
        assert_eq!(calls, 1);
        assert_eq!(relax.steps_taken(), 1);
    }

    #[test]
    fn empty_set_converges_immediately() {
        let mut relax = Relaxation::new(Vec::new());
        let speed = relax.step();
        assert!(Relaxation::converged(speed));
    }
}
