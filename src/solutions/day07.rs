//! Day 7: a circuit of 16-bit wires and bitwise gates.
//!
//! Every statement drives one wire. The circuit is evaluated in topological order with an
//! explicit worklist, so a cycle shows up as wires that never become ready instead of
//! unbounded recursion.

use std::collections::VecDeque;

use anyhow::Result;
use petgraph::{graphmap::DiGraphMap, Direction};
use rustc_hash::FxHashMap;

use crate::Error;

/// An input of a gate: another wire or a literal signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Wire(&'a str),
    Value(u16),
}

impl<'a> Operand<'a> {
    /// Literals are masked to 16 bits, so `70000` reads as `4464`.
    fn parse(token: &'a str) -> crate::Result<Self> {
        if let Ok(value) = token.parse::<i64>() {
            Ok(Operand::Value((value & 0xffff) as u16))
        } else if is_wire_name(token) {
            Ok(Operand::Wire(token))
        } else {
            Err(Error::Config(format!("invalid operand {token:?}")))
        }
    }
}

/// What drives a wire. `Signal` covers both a constant and a plain connection from
/// another wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate<'a> {
    Signal(Operand<'a>),
    Not(Operand<'a>),
    And(Operand<'a>, Operand<'a>),
    Or(Operand<'a>, Operand<'a>),
    LShift(Operand<'a>, Operand<'a>),
    RShift(Operand<'a>, Operand<'a>),
}

impl<'a> Gate<'a> {
    fn parse(expr: &'a str) -> crate::Result<Self> {
        let tokens: Vec<&str> = expr.split_whitespace().collect();
        let gate = match tokens[..] {
            [a] => Gate::Signal(Operand::parse(a)?),
            ["NOT", a] => Gate::Not(Operand::parse(a)?),
            [a, op, b] => {
                let (a, b) = (Operand::parse(a)?, Operand::parse(b)?);
                match op {
                    "AND" => Gate::And(a, b),
                    "OR" => Gate::Or(a, b),
                    "LSHIFT" => Gate::LShift(a, b),
                    "RSHIFT" => Gate::RShift(a, b),
                    _ => return Err(Error::Config(format!("unknown gate {op:?} in {expr:?}"))),
                }
            }
            _ => return Err(Error::Config(format!("unrecognized expression {expr:?}"))),
        };
        Ok(gate)
    }

    fn operands(self) -> [Option<Operand<'a>>; 2] {
        match self {
            Gate::Signal(a) | Gate::Not(a) => [Some(a), None],
            Gate::And(a, b) | Gate::Or(a, b) | Gate::LShift(a, b) | Gate::RShift(a, b) => {
                [Some(a), Some(b)]
            }
        }
    }

    /// Output signal, given the signals of all wires this gate reads. Working in `u16`
    /// keeps every result within 16 bits, including a complement.
    fn output(self, signals: &FxHashMap<&str, u16>) -> crate::Result<u16> {
        let value = |operand: Operand| match operand {
            Operand::Value(v) => Ok(v),
            Operand::Wire(wire) => signals
                .get(wire)
                .copied()
                .ok_or_else(|| Error::Config(format!("wire {wire} has no signal yet"))),
        };
        Ok(match self {
            Gate::Signal(a) => value(a)?,
            Gate::Not(a) => !value(a)?,
            Gate::And(a, b) => value(a)? & value(b)?,
            Gate::Or(a, b) => value(a)? | value(b)?,
            Gate::LShift(a, b) => value(a)?.checked_shl(value(b)?.into()).unwrap_or(0),
            Gate::RShift(a, b) => value(a)?.checked_shr(value(b)?.into()).unwrap_or(0),
        })
    }
}

fn is_wire_name(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_lowercase())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Circuit<'a> {
    gates: FxHashMap<&'a str, Gate<'a>>,
}

impl<'a> Circuit<'a> {
    /// Parses one `<expression> -> <wire>` statement per line.
    pub fn parse(input: &'a str) -> crate::Result<Self> {
        let mut circuit = Circuit::default();
        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            let (expr, wire) = line
                .split_once(" -> ")
                .ok_or_else(|| Error::Config(format!("missing '->' in {line:?}")))?;
            let wire = wire.trim();
            if !is_wire_name(wire) {
                return Err(Error::Config(format!("invalid wire name {wire:?}")));
            }
            if circuit.gates.insert(wire, Gate::parse(expr)?).is_some() {
                return Err(Error::Config(format!("wire {wire} is driven more than once")));
            }
        }
        Ok(circuit)
    }

    pub fn gate(&self, wire: &str) -> Option<Gate<'a>> {
        self.gates.get(wire).copied()
    }

    /// Replaces whatever drives `wire`.
    pub fn set(&mut self, wire: &'a str, gate: Gate<'a>) {
        self.gates.insert(wire, gate);
    }

    /// Signals of all wires.
    pub fn evaluate(&self) -> crate::Result<FxHashMap<&'a str, u16>> {
        // Edges point from a wire to the wires it feeds.
        let mut graph = DiGraphMap::<&str, ()>::new();
        for (&wire, &gate) in &self.gates {
            graph.add_node(wire);
            for operand in gate.operands().into_iter().flatten() {
                if let Operand::Wire(source) = operand {
                    if !self.gates.contains_key(source) {
                        return Err(Error::Config(format!(
                            "wire {source} feeds {wire} but nothing drives it"
                        )));
                    }
                    graph.add_edge(source, wire, ());
                }
            }
        }

        let mut pending: FxHashMap<&str, usize> = graph
            .nodes()
            .map(|wire| (wire, graph.neighbors_directed(wire, Direction::Incoming).count()))
            .collect();
        let mut queue: VecDeque<&str> = pending
            .iter()
            .filter(|&(_, &count)| count == 0)
            .map(|(&wire, _)| wire)
            .collect();

        let mut signals = FxHashMap::default();
        while let Some(wire) = queue.pop_front() {
            let value = self.gates[wire].output(&signals)?;
            signals.insert(wire, value);
            for next in graph.neighbors_directed(wire, Direction::Outgoing) {
                if let Some(count) = pending.get_mut(next) {
                    *count -= 1;
                    if *count == 0 {
                        queue.push_back(next);
                    }
                }
            }
        }

        if signals.len() < self.gates.len() {
            let mut stuck: Vec<&str> = pending
                .into_iter()
                .filter(|&(_, count)| count > 0)
                .map(|(wire, _)| wire)
                .collect();
            stuck.sort_unstable();
            return Err(Error::Config(format!(
                "circuit has a cycle through {}",
                stuck.join(", ")
            )));
        }

        tracing::debug!(wires = signals.len(), "evaluated circuit");
        Ok(signals)
    }

    pub fn signal(&self, wire: &str) -> crate::Result<u16> {
        self.evaluate()?
            .get(wire)
            .copied()
            .ok_or_else(|| Error::Config(format!("wire {wire} is not in the circuit")))
    }
}

pub fn day7(input: &str) -> Result<(i64, i64)> {
    let mut circuit = Circuit::parse(input)?;
    let a = circuit.signal("a")?;

    if circuit.gate("b").is_none() {
        return Err(Error::Config("wire b is not in the circuit".to_string()).into());
    }
    circuit.set("b", Gate::Signal(Operand::Value(a)));
    let overridden = circuit.signal("a")?;

    Ok((a.into(), overridden.into()))
}
