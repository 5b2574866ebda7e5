// Werewolf deduction-puzzle generator
//
// Synthesizes "seer claim" logic puzzles: N players are split into hidden
// factions of fixed sizes (villagers, wolves, lunatics), and each player may
// publicly claim that another player reads white (villager-side) or black.
// The generator keeps adding randomly biased claims until exactly one
// assignment of players to factions is consistent with every villager's
// claims; that assignment is the puzzle's answer.
//
// Current limitations:
//
// - The search stops at the first claim set with a unique answer, which is
//   not necessarily the smallest such set; no redundant-claim pruning runs
//   after convergence.
//
// - Configurations with both wolves and lunatics present cannot converge:
//   a villager's claims read black on both factions, so every coherent
//   candidate survives a wolf/lunatic swap and the coherent set never
//   reaches size one. Generation reports a convergence failure instead.
//   TODO: Give lunatics the tabletop divination semantics (a lunatic reads
//   white to the seer) so that three-faction puzzles become solvable.
//
// - Candidate validation is embarrassingly parallel but runs single-threaded.
//   Puzzle rosters are small (a dozen players or so) and have not justified
//   threading.

use std::collections::BTreeMap;

use clap::{Parser, Subcommand};
use log::debug;
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Team {
    Villager,
    Wolf,
    Lunatic,
}

// A claim one player makes about another. White means "villager-side",
// black means "not a villager". Only claims made by players who sit in
// the villager seats of a candidate partition are ever checked against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    White,
    Black,
}

impl Verdict {
    fn mark(&self) -> &'static str {
        match self {
            Verdict::White => "○",
            Verdict::Black => "●",
        }
    }
}

#[derive(Debug, Error)]
enum PuzzleError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("no unique coherent partition within {iterations} iterations")]
    Convergence { iterations: usize },

    #[error("strategy dead end: {0}")]
    InvariantViolation(&'static str),
}

// Faction sizes for one puzzle. Villagers must hold a strict majority so
// that every candidate villager set overlaps the true one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GroupConfig {
    villagers: usize,
    wolves: usize,
    lunatics: usize,
}

impl GroupConfig {
    fn new(villagers: usize, wolves: usize, lunatics: usize) -> Result<Self, PuzzleError> {
        if villagers == 0 || wolves == 0 {
            return Err(PuzzleError::Config(
                "at least one villager and one wolf are required".to_string(),
            ));
        }
        if villagers <= wolves + lunatics {
            return Err(PuzzleError::Config(format!(
                "villagers ({}) must outnumber wolves and lunatics combined ({})",
                villagers,
                wolves + lunatics
            )));
        }
        let total = villagers + wolves + lunatics;
        if total > 26 {
            return Err(PuzzleError::Config(format!(
                "alphabetic labels cap the roster at 26 players, got {}",
                total
            )));
        }
        Ok(GroupConfig {
            villagers,
            wolves,
            lunatics,
        })
    }

    fn total(&self) -> usize {
        self.villagers + self.wolves + self.lunatics
    }

    // Ground-truth faction of an index: players are dealt in contiguous
    // blocks, villagers first, then wolves, then lunatics.
    fn team_of(&self, index: usize) -> Team {
        if index < self.villagers {
            Team::Villager
        } else if index < self.villagers + self.wolves {
            Team::Wolf
        } else {
            Team::Lunatic
        }
    }

    // What a truthful player would say about `target`.
    fn truth_about(&self, target: usize) -> Verdict {
        if self.team_of(target) == Team::Villager {
            Verdict::White
        } else {
            Verdict::Black
        }
    }
}

// A puzzle participant: a dense 0-based index plus a sparse claim map keyed
// by target index. Every player carries a permanent white claim about
// itself; all other entries come and go through add_claim/delete_claim.
//
// The claim map is a BTreeMap so that iteration order is deterministic and
// seeded runs reproduce exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Player {
    index: usize,
    claims: BTreeMap<usize, Verdict>,
}

impl Player {
    fn new(index: usize) -> Self {
        let mut claims = BTreeMap::new();
        claims.insert(index, Verdict::White);
        Player { index, claims }
    }

    fn add_claim(&mut self, target: usize, verdict: Verdict) {
        assert_ne!(target, self.index, "the self white entry is fixed");
        self.claims.insert(target, verdict);
    }

    fn delete_claim(&mut self, target: usize) {
        assert_ne!(target, self.index, "the self white entry is permanent");
        let removed = self.claims.remove(&target);
        assert!(removed.is_some(), "no claim about player {} to delete", target);
    }

    fn claim_count(&self) -> usize {
        self.claims.len()
    }

    // Has the player claimed anything beyond the implicit self entry?
    fn has_claims(&self) -> bool {
        self.claims.len() > 1
    }

    // Rewrite the player's own index and every claim key through a
    // bijection over all referenced indices, then re-assert the self white
    // entry under the new index.
    fn relabel(&mut self, mapping: &BTreeMap<usize, usize>) {
        self.index = mapping[&self.index];
        let rekeyed: BTreeMap<usize, Verdict> = self
            .claims
            .iter()
            .map(|(&old, &verdict)| (mapping[&old], verdict))
            .collect();
        self.claims = rekeyed;
        self.claims.insert(self.index, Verdict::White);
    }
}

// Players are dealt position-indexed: players[i].index == i. Mutation never
// disturbs this; relabel_players restores it after rewriting indices.
fn initial_players(config: &GroupConfig) -> Vec<Player> {
    (0..config.total()).map(Player::new).collect()
}

// One candidate assignment of indices to factions. Villagers are the
// implicit remainder. Index lists are kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Partition {
    wolves: Vec<usize>,
    lunatics: Vec<usize>,
}

impl Partition {
    fn expected_verdict(&self, target: usize) -> Verdict {
        if self.wolves.contains(&target) || self.lunatics.contains(&target) {
            Verdict::Black
        } else {
            Verdict::White
        }
    }

    fn is_villager(&self, index: usize) -> bool {
        !self.wolves.contains(&index) && !self.lunatics.contains(&index)
    }
}

// All k-subsets of `elements`, appended to `result` in lexicographic
// position order. A k of zero yields exactly one empty subset, so that a
// faction of size zero assigns like any other.
fn generate_combinations<T: Copy>(elements: &[T], k: usize, result: &mut Vec<Vec<T>>) {
    if k > elements.len() {
        return;
    }

    let mut current = Vec::with_capacity(k);
    generate_combinations_helper(elements, k, 0, &mut current, result);
}

fn generate_combinations_helper<T: Copy>(
    elements: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    result: &mut Vec<Vec<T>>,
) {
    if current.len() == k {
        result.push(current.clone());
        return;
    }

    for i in start..elements.len() {
        current.push(elements[i]);
        generate_combinations_helper(elements, k, i + 1, current, result);
        current.pop();
    }
}

// A candidate is coherent when every player it seats among the villagers
// has claims that agree with it: white on candidate villagers, black on
// candidate wolves and lunatics. Wolf and lunatic claims are unconstrained.
fn is_coherent(players: &[Player], candidate: &Partition) -> bool {
    for player in players {
        if !candidate.is_villager(player.index) {
            continue;
        }
        for (&target, &verdict) in &player.claims {
            if verdict != candidate.expected_verdict(target) {
                return false;
            }
        }
    }
    true
}

// Enumerate every partition of the roster into the configured faction
// sizes that is coherent with the current claims. Recomputed from scratch
// each time; the claim map changes between calls.
fn coherent_partitions(
    players: &[Player],
    config: &GroupConfig,
) -> Result<Vec<Partition>, PuzzleError> {
    if players.len() != config.total() {
        return Err(PuzzleError::Config(format!(
            "{} players do not fit a {}/{}/{} faction split",
            players.len(),
            config.villagers,
            config.wolves,
            config.lunatics
        )));
    }

    let indices: Vec<usize> = (0..players.len()).collect();
    let mut wolf_sets = Vec::new();
    generate_combinations(&indices, config.wolves, &mut wolf_sets);

    let mut coherent = Vec::new();
    for wolf_set in &wolf_sets {
        let remainder: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|i| !wolf_set.contains(i))
            .collect();
        let mut lunatic_sets = Vec::new();
        generate_combinations(&remainder, config.lunatics, &mut lunatic_sets);

        for lunatic_set in lunatic_sets {
            let candidate = Partition {
                wolves: wolf_set.clone(),
                lunatics: lunatic_set,
            };
            if is_coherent(players, &candidate) {
                coherent.push(candidate);
            }
        }
    }
    Ok(coherent)
}

// A single step proposed by a strategy. The synthesis loop applies it
// through the Player methods so the claim-map invariants stay centrally
// enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    Add {
        source: usize,
        target: usize,
        verdict: Verdict,
    },
    Delete {
        source: usize,
        target: usize,
    },
}

fn apply_mutation(players: &mut [Player], mutation: Mutation) {
    match mutation {
        Mutation::Add {
            source,
            target,
            verdict,
        } => players[source].add_claim(target, verdict),
        Mutation::Delete { source, target } => players[source].delete_claim(target),
    }
}

// Claim-mutation policy. choose_add is consulted while more than one
// coherent partition remains, choose_delete when none remains. Either
// returns a mutation to apply or fails with InvariantViolation when no
// eligible move exists, which indicates a misconfigured strategy rather
// than a recoverable state.
trait Strategy {
    fn name(&self) -> &'static str;

    fn choose_add(
        &self,
        players: &[Player],
        rng: &mut dyn RngCore,
    ) -> Result<Mutation, PuzzleError>;

    fn choose_delete(
        &self,
        players: &[Player],
        rng: &mut dyn RngCore,
    ) -> Result<Mutation, PuzzleError>;
}

// Players that have not yet claimed about every other player.
fn spare_sources(players: &[Player]) -> Vec<usize> {
    players
        .iter()
        .filter(|p| p.claim_count() < players.len())
        .map(|p| p.index)
        .collect()
}

fn unclaimed_targets(player: &Player, total: usize) -> Vec<usize> {
    (0..total).filter(|t| !player.claims.contains_key(t)).collect()
}

// Remove a random non-self claim from a random player that has one.
fn random_delete(players: &[Player], rng: &mut dyn RngCore) -> Result<Mutation, PuzzleError> {
    let sources: Vec<usize> = players
        .iter()
        .filter(|p| p.has_claims())
        .map(|p| p.index)
        .collect();
    let &source = sources
        .choose(&mut *rng)
        .ok_or(PuzzleError::InvariantViolation(
            "no player has a removable claim",
        ))?;

    let targets: Vec<usize> = players[source]
        .claims
        .keys()
        .copied()
        .filter(|&t| t != source)
        .collect();
    let &target = targets
        .choose(&mut *rng)
        .ok_or(PuzzleError::InvariantViolation(
            "claim map held only the self entry",
        ))?;

    Ok(Mutation::Delete { source, target })
}

// Coin-flip verdict for a source whose claims are not validated, capped so
// the profile stays consistent with some partition that seats the source
// among the villagers: at most wolves+lunatics black claims, at most
// villagers white claims (the self entry counts).
fn constrained_coin_flip(
    config: &GroupConfig,
    source: &Player,
    rng: &mut dyn RngCore,
) -> Verdict {
    let whites = source
        .claims
        .values()
        .filter(|&&v| v == Verdict::White)
        .count();
    let blacks = source.claim_count() - whites;

    if blacks >= config.wolves + config.lunatics {
        Verdict::White
    } else if whites >= config.villagers {
        Verdict::Black
    } else if rng.gen_bool(0.5) {
        Verdict::White
    } else {
        Verdict::Black
    }
}

// Unbiased claim addition: random source with spare capacity, random
// unclaimed target. Ground-truth villagers always speak the truth, which
// keeps the dealt partition coherent no matter how long the loop runs;
// everyone else flips the capped coin.
fn uniform_add(
    config: &GroupConfig,
    players: &[Player],
    rng: &mut dyn RngCore,
) -> Result<Mutation, PuzzleError> {
    let sources = spare_sources(players);
    let &source = sources
        .choose(&mut *rng)
        .ok_or(PuzzleError::InvariantViolation(
            "every claim map is already full",
        ))?;

    let targets = unclaimed_targets(&players[source], players.len());
    let &target = targets
        .choose(&mut *rng)
        .ok_or(PuzzleError::InvariantViolation(
            "source has no unclaimed target",
        ))?;

    let verdict = if config.team_of(source) == Team::Villager {
        config.truth_about(target)
    } else {
        constrained_coin_flip(config, &players[source], &mut *rng)
    };

    Ok(Mutation::Add {
        source,
        target,
        verdict,
    })
}

struct UniformStrategy {
    config: GroupConfig,
}

impl Strategy for UniformStrategy {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn choose_add(
        &self,
        players: &[Player],
        rng: &mut dyn RngCore,
    ) -> Result<Mutation, PuzzleError> {
        uniform_add(&self.config, players, rng)
    }

    fn choose_delete(
        &self,
        players: &[Player],
        rng: &mut dyn RngCore,
    ) -> Result<Mutation, PuzzleError> {
        random_delete(players, rng)
    }
}

// A narrative pattern: a fixed set of players who only ever speak the
// truth. Pattern sources claim first; once each has claimed about every
// other player the strategy degrades to a uniform add, and to deletion
// when every claim map on the roster is full.
struct BiasedStrategy {
    name: &'static str,
    truthful_sources: Vec<usize>,
    config: GroupConfig,
}

impl BiasedStrategy {
    // One designated wolf runs a flawless seer act on the whole roster.
    fn master_wolf(config: GroupConfig) -> Self {
        BiasedStrategy {
            name: "master-wolf",
            truthful_sources: vec![config.villagers],
            config,
        }
    }

    // Every wolf speaks only the truth, denouncing the other wolves as
    // black; the implicit white self entry stays the lone lie.
    fn honest_wolves(config: GroupConfig) -> Self {
        BiasedStrategy {
            name: "honest-wolves",
            truthful_sources: (config.villagers..config.villagers + config.wolves).collect(),
            config,
        }
    }

    // The first half (rounded up) of each non-villager faction plays seer:
    // their claim profiles are indistinguishable from a real villager's.
    fn impostors(config: GroupConfig) -> Self {
        let wolf_start = config.villagers;
        let lunatic_start = config.villagers + config.wolves;
        let mut truthful_sources: Vec<usize> =
            (wolf_start..wolf_start + (config.wolves + 1) / 2).collect();
        truthful_sources.extend(lunatic_start..lunatic_start + (config.lunatics + 1) / 2);
        BiasedStrategy {
            name: "impostors",
            truthful_sources,
            config,
        }
    }
}

impl Strategy for BiasedStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn choose_add(
        &self,
        players: &[Player],
        rng: &mut dyn RngCore,
    ) -> Result<Mutation, PuzzleError> {
        let pending: Vec<usize> = self
            .truthful_sources
            .iter()
            .copied()
            .filter(|&s| players[s].claim_count() < players.len())
            .collect();

        if let Some(&source) = pending.choose(&mut *rng) {
            let targets = unclaimed_targets(&players[source], players.len());
            let &target = targets
                .choose(&mut *rng)
                .ok_or(PuzzleError::InvariantViolation(
                    "pattern source has no unclaimed target",
                ))?;
            return Ok(Mutation::Add {
                source,
                target,
                verdict: self.config.truth_about(target),
            });
        }

        if !spare_sources(players).is_empty() {
            return uniform_add(&self.config, players, rng);
        }

        // Claim space is saturated; shake the state loose instead.
        random_delete(players, rng)
    }

    fn choose_delete(
        &self,
        players: &[Player],
        rng: &mut dyn RngCore,
    ) -> Result<Mutation, PuzzleError> {
        random_delete(players, rng)
    }
}

const STRATEGY_NAMES: &[&str] = &["uniform", "master-wolf", "honest-wolves", "impostors"];

fn strategy_from_name(
    name: Option<&str>,
    config: &GroupConfig,
) -> Result<Box<dyn Strategy>, PuzzleError> {
    let raw = match name {
        Some(raw) => raw,
        None => return Ok(Box::new(UniformStrategy { config: *config })),
    };

    match raw.to_lowercase().replace(&[' ', '-', '_'][..], "").as_str() {
        "uniform" => Ok(Box::new(UniformStrategy { config: *config })),
        "masterwolf" => Ok(Box::new(BiasedStrategy::master_wolf(*config))),
        "honestwolves" => Ok(Box::new(BiasedStrategy::honest_wolves(*config))),
        "impostors" => Ok(Box::new(BiasedStrategy::impostors(*config))),
        _ => Err(PuzzleError::Config(format!(
            "unknown strategy '{}', expected one of: {}",
            raw,
            STRATEGY_NAMES.join(", ")
        ))),
    }
}

// The synthesis loop. Each pass recomputes the coherent set: empty means
// the claims over-constrained the roster (delete one), more than one means
// the puzzle is still ambiguous (add one), exactly one is the answer.
// Carries no state across calls beyond the mutated players, so it is safe
// to call again after relabeling without re-initialization.
fn generate(
    players: &mut [Player],
    config: &GroupConfig,
    strategy: &dyn Strategy,
    rng: &mut dyn RngCore,
    max_iterations: usize,
) -> Result<Partition, PuzzleError> {
    for iteration in 0..max_iterations {
        let mut coherent = coherent_partitions(players, config)?;
        debug!(
            "iteration {}: {} coherent partitions",
            iteration,
            coherent.len()
        );

        match coherent.len() {
            0 => {
                let mutation = strategy.choose_delete(players, &mut *rng)?;
                apply_mutation(players, mutation);
            }
            1 => return Ok(coherent.remove(0)),
            _ => {
                let mutation = strategy.choose_add(players, &mut *rng)?;
                apply_mutation(players, mutation);
            }
        }
    }

    Err(PuzzleError::Convergence {
        iterations: max_iterations,
    })
}

// Renumber players by descending claim count (ties by ascending original
// index) so the most talkative players come first in the rendered puzzle.
// Returns the applied old-to-new bijection.
fn relabel_players(players: &mut [Player]) -> BTreeMap<usize, usize> {
    let mut order: Vec<usize> = (0..players.len()).collect();
    order.sort_by_key(|&i| (std::cmp::Reverse(players[i].claim_count()), i));

    let mapping: BTreeMap<usize, usize> = order
        .iter()
        .enumerate()
        .map(|(new, &old)| (old, new))
        .collect();

    for player in players.iter_mut() {
        player.relabel(&mapping);
    }
    players.sort_by_key(|p| p.index);
    mapping
}

// Relabel, then re-derive the answer under the new numbering. The claim
// structure is isomorphic to the pre-relabel one, so a single iteration
// finds the singleton coherent set again.
fn relabel_and_regenerate(
    players: &mut [Player],
    config: &GroupConfig,
    strategy: &dyn Strategy,
    rng: &mut dyn RngCore,
) -> Result<Partition, PuzzleError> {
    relabel_players(players);
    generate(players, config, strategy, rng, 1)
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lang {
    En,
    Jp,
}

impl Lang {
    fn from_name(name: &str) -> Option<Lang> {
        match name.to_lowercase().as_str() {
            "en" => Some(Lang::En),
            "jp" | "ja" => Some(Lang::Jp),
            _ => None,
        }
    }
}

fn index_to_alphabet(index: usize) -> char {
    debug_assert!(index < 26, "roster exceeds alphabetic labels");
    (b'A' + index as u8) as char
}

fn claim_line(player: &Player, lang: Lang) -> String {
    let mut marks = Vec::new();
    for (&target, &verdict) in &player.claims {
        if target == player.index {
            continue;
        }
        marks.push(format!("{}{}", index_to_alphabet(target), verdict.mark()));
    }

    let label = index_to_alphabet(player.index);
    match lang {
        Lang::En => format!("{}'s claim:{}", label, marks.join(",")),
        Lang::Jp => format!("{}の主張:{}", label, marks.join(",")),
    }
}

// Problem text: role-count header, roster span, then one claim line per
// claiming player in descending claim-count order. Claimless players are
// covered by the roster span but get no line of their own.
fn render_problem(players: &[Player], config: &GroupConfig, lang: Lang) -> String {
    let last = index_to_alphabet(players.len() - 1);
    let mut lines = Vec::new();

    match lang {
        Lang::En => {
            lines.push("## Problem".to_string());
            let roles = if config.lunatics == 0 {
                format!("Roles:Villager/Wolf={}/{}", config.villagers, config.wolves)
            } else {
                format!(
                    "Roles:Villager/Wolf/Lunatic={}/{}/{}",
                    config.villagers, config.wolves, config.lunatics
                )
            };
            lines.push(format!("{}, PL:A-{}", roles, last));
            lines.push("### Player's claims".to_string());
        }
        Lang::Jp => {
            lines.push("## 問題".to_string());
            let roles = if config.lunatics == 0 {
                format!("内訳:村陣営/狼={}/{}", config.villagers, config.wolves)
            } else {
                format!(
                    "内訳:村陣営/狼/狂={}/{}/{}",
                    config.villagers, config.wolves, config.lunatics
                )
            };
            lines.push(format!("{}, PL:A-{}", roles, last));
            lines.push("### 各PLの主張".to_string());
        }
    }

    let mut order: Vec<usize> = (0..players.len()).collect();
    order.sort_by_key(|&i| (std::cmp::Reverse(players[i].claim_count()), i));
    for i in order {
        if players[i].has_claims() {
            lines.push(claim_line(&players[i], lang));
        }
    }

    lines.join("\n")
}

fn render_answer(answer: &Partition, config: &GroupConfig, lang: Lang) -> String {
    let label_list = |indices: &[usize]| -> String {
        indices
            .iter()
            .map(|&i| index_to_alphabet(i).to_string())
            .collect::<Vec<String>>()
            .join(",")
    };

    let mut lines = Vec::new();
    match lang {
        Lang::En => {
            lines.push("## Answer".to_string());
            lines.push(format!("Wolves:{}", label_list(&answer.wolves)));
            if config.lunatics > 0 {
                lines.push(format!("Lunatics:{}", label_list(&answer.lunatics)));
            }
        }
        Lang::Jp => {
            lines.push("## 解答".to_string());
            lines.push(format!("狼:{}", label_list(&answer.wolves)));
            if config.lunatics > 0 {
                lines.push(format!("狂人:{}", label_list(&answer.lunatics)));
            }
        }
    }
    lines.join("\n")
}

/// Werewolf deduction-puzzle generator
#[derive(Parser, Debug)]
#[command(name = "werewolf-core")]
#[command(about = "Werewolf deduction-puzzle generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a puzzle and its unique answer
    Generate {
        /// Number of villagers (must outnumber wolves and lunatics combined)
        #[arg(short, long, default_value_t = 4)]
        villagers: usize,

        /// Number of wolves
        #[arg(short, long, default_value_t = 1)]
        wolves: usize,

        /// Number of lunatics
        #[arg(short, long, default_value_t = 0)]
        lunatics: usize,

        /// Output language: en, jp
        #[arg(long, default_value = "en")]
        lang: String,

        /// Iteration bound for the synthesis loop
        #[arg(long, default_value_t = 100)]
        max_iterations: usize,

        /// Claim strategy: uniform, master-wolf, honest-wolves, impostors
        #[arg(short, long)]
        strategy: Option<String>,

        /// RNG seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Generate {
            villagers,
            wolves,
            lunatics,
            lang,
            max_iterations,
            strategy,
            seed,
        }) => {
            generate_cmd(
                villagers,
                wolves,
                lunatics,
                &lang,
                max_iterations,
                strategy.as_deref(),
                seed,
            );
        }
        None => {
            println!("=== Werewolf Puzzle Generator ===\n");
            println!("Run tests with: cargo test");
            println!("Run CLI with: cargo run -- generate [options]\n");
            println!("Example:");
            println!("  cargo run -- generate -v 4 -w 2 --seed 7");
        }
    }
}

fn generate_cmd(
    villagers: usize,
    wolves: usize,
    lunatics: usize,
    lang: &str,
    max_iterations: usize,
    strategy_name: Option<&str>,
    seed: Option<u64>,
) {
    let lang = match Lang::from_name(lang) {
        Some(l) => l,
        None => {
            eprintln!("Error: unknown language '{}', expected en or jp", lang);
            std::process::exit(1);
        }
    };

    let config = match GroupConfig::new(villagers, wolves, lunatics) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let strategy = match strategy_from_name(strategy_name, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    debug!("strategy: {}", strategy.name());

    let mut rng = match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_entropy(),
    };

    let mut players = initial_players(&config);
    if let Err(e) = generate(
        &mut players,
        &config,
        strategy.as_ref(),
        &mut rng,
        max_iterations,
    ) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Renumber so the chattiest players lead the rendered text, then
    // re-derive the answer under the new numbering.
    let answer = match relabel_and_regenerate(&mut players, &config, strategy.as_ref(), &mut rng) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", render_problem(&players, &config, lang));
    println!("{}", render_answer(&answer, &config, lang));
}
