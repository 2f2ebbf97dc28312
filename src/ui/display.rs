//! Text rendering for the map, battles and the closing summary

use std::fmt::Write;

use crate::battle::{BattleOutcome, BattleReport};
use crate::session::SessionStats;
use crate::territory::Registry;

pub const MAP_HEADER: &str = "=========== MAPA ATUAL ===========";
pub const MENU: &str = "\n1 - Atacar\n0 - Sair\nEscolha: ";

/// One table row: `[index] name | Dono: faction | Tropas: n`
pub fn render_map(registry: &Registry) -> String {
    let mut out = format!("\n{}\n", MAP_HEADER);
    for (i, territory) in registry.iter().enumerate() {
        let _ = writeln!(
            out,
            "[{}] {} | Dono: {} | Tropas: {}",
            i + 1,
            territory.name(),
            territory.faction(),
            territory.troops()
        );
    }
    out
}

pub fn render_battle(report: &BattleReport) -> String {
    let mut out = String::from("\n--- BATALHA ---\n");
    let _ = writeln!(
        out,
        "{} ({}) rolou: {}",
        report.attacker.name, report.attacker.faction, report.attack_roll
    );
    let _ = writeln!(
        out,
        "{} ({}) rolou: {}",
        report.defender.name, report.defender.faction, report.defend_roll
    );
    match report.outcome {
        BattleOutcome::Conquered { troops_moved } => {
            out.push_str("ATACANTE VENCEU E CONQUISTOU O TERRITORIO!\n");
            let _ = writeln!(
                out,
                "{} tropa(s) avancaram para {}.",
                troops_moved, report.defender.name
            );
        }
        BattleOutcome::Repelled => out.push_str("DEFENSOR RESISTIU AO ATAQUE!\n"),
    }
    out
}

pub fn render_summary(registry: &Registry, stats: &SessionStats) -> String {
    let mut out = String::from("\n=========== FIM DE JOGO ===========\n");
    let _ = writeln!(
        out,
        "Batalhas: {} | Conquistas: {}",
        stats.battles, stats.conquests
    );
    for tally in registry.faction_summary() {
        let _ = writeln!(
            out,
            "{}: {} territorio(s), {} tropa(s)",
            tally.faction, tally.territories, tally.troops
        );
    }
    out
}
