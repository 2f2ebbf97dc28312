//! Game session - the menu loop that drives attacks
//!
//! One command is handled at a time: show the map, read a menu choice, and
//! either resolve an attack or quit. Rejected input is reported and the loop
//! carries on without touching the map.

pub mod setup;

pub use setup::{read_territory_count, setup_registry, validate_territory_count, ConsoleSource};

use std::io::{BufRead, Write};

use crate::battle::{BattleReport, Dice};
use crate::command::{AttackOrder, CommandExecutor, MenuChoice};
use crate::core::error::{ConquestError, Result};
use crate::territory::Registry;
use crate::ui::display::{render_battle, render_map, render_summary, MENU};
use crate::ui::Prompter;

/// Running totals shown when the game ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub battles: u32,
    pub conquests: u32,
}

/// A game in progress: the map plus the dice it is played with
pub struct Session<D> {
    registry: Registry,
    dice: D,
    stats: SessionStats,
}

impl<D: Dice> Session<D> {
    pub fn new(registry: Registry, dice: D) -> Self {
        Self {
            registry,
            dice,
            stats: SessionStats::default(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Validate and resolve one attack
    pub fn attack(&mut self, order: AttackOrder) -> Result<BattleReport> {
        let report = CommandExecutor::attack(&mut self.registry, order, &mut self.dice)?;
        self.stats.battles += 1;
        if report.attacker_won() {
            self.stats.conquests += 1;
        }
        Ok(report)
    }

    /// Run the menu loop until the player quits or input ends
    ///
    /// The summary is shown either way; a closed input is still reported
    /// to the caller as [`ConquestError::InputClosed`].
    pub fn run<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> Result<()> {
        let outcome = self.play(prompter);
        if matches!(&outcome, Err(e) if !matches!(e, ConquestError::InputClosed)) {
            return outcome;
        }

        tracing::info!(
            battles = self.stats.battles,
            conquests = self.stats.conquests,
            "Session ended"
        );
        prompter.show(&render_summary(&self.registry, &self.stats))?;
        outcome
    }

    fn play<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> Result<()> {
        loop {
            prompter.show(&render_map(&self.registry))?;
            let choice = prompter.read_integer(MENU)?;

            match MenuChoice::from_input(choice) {
                Some(MenuChoice::Quit) => break,
                Some(MenuChoice::Attack) => self.attack_turn(prompter)?,
                None => {
                    tracing::debug!(choice, "Unknown menu option");
                    prompter.say("Opcao invalida!")?;
                }
            }
        }
        Ok(())
    }

    fn attack_turn<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> Result<()> {
        let attacker = prompter.read_integer("\nEscolha o territorio ATACANTE (numero): ")?;
        let defender = prompter.read_integer("Escolha o territorio DEFENSOR (numero): ")?;

        match self.attack(AttackOrder::new(attacker, defender)) {
            Ok(report) => prompter.show(&render_battle(&report)),
            Err(ConquestError::Attack(rejection)) => {
                tracing::debug!(attacker, defender, %rejection, "Attack rejected");
                prompter.say(&rejection.to_string())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::ScriptedDice;
    use crate::territory::{Label, Territory};
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    fn territory(name: &str, faction: &str, troops: i64) -> Territory {
        Territory::new(
            Label::name(name).unwrap(),
            Label::faction(faction).unwrap(),
            troops,
        )
        .unwrap()
    }

    fn session(rolls: &[u8]) -> Session<ScriptedDice> {
        let registry = Registry::from_territories(vec![
            territory("Brasil", "Red", 10),
            territory("Chile", "Blue", 5),
        ]);
        Session::new(registry, ScriptedDice::new(rolls.iter().copied()))
    }

    fn run(session: &mut Session<ScriptedDice>, input: &str) -> (Result<()>, String) {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = session.run(&mut prompter);
        let output = String::from_utf8(prompter.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_attack_updates_stats() {
        let mut s = session(&[6, 3, 1, 1]);
        s.attack(AttackOrder::new(1, 2)).unwrap();
        assert_eq!(
            s.stats(),
            SessionStats {
                battles: 1,
                conquests: 1
            }
        );

        // Chile is now Red: a second attack is refused and not counted
        assert!(s.attack(AttackOrder::new(1, 2)).is_err());
        assert_eq!(s.stats().battles, 1);
    }

    #[test]
    fn test_quit_immediately() {
        let mut s = session(&[]);
        let (result, output) = run(&mut s, "0\n");
        assert!(result.is_ok());
        assert!(output.contains("[1] Brasil | Dono: Red | Tropas: 10"));
        assert!(output.contains("FIM DE JOGO"));
    }

    #[test]
    fn test_attack_then_quit() {
        let mut s = session(&[6, 3]);
        let (result, output) = run(&mut s, "1\n1\n2\n0\n");
        assert!(result.is_ok());
        assert!(output.contains("ATACANTE VENCEU"));
        assert!(output.contains("[2] Chile | Dono: Red | Tropas: 5"));
        assert_eq!(s.registry().get(0).unwrap().troops(), 5);
    }

    #[test]
    fn test_rejected_attack_reported() {
        let mut s = session(&[6, 3]);
        let (result, output) = run(&mut s, "1\n2\n2\n1\n1\n9\n0\n");
        assert!(result.is_ok());
        assert!(output.contains("Um territorio nao pode atacar ele mesmo!"));
        assert!(output.contains("Territorio invalido!"));
        assert_eq!(s.stats().battles, 0);
    }

    #[test]
    fn test_unknown_option() {
        let mut s = session(&[]);
        let (result, output) = run(&mut s, "7\n0\n");
        assert!(result.is_ok());
        assert!(output.contains("Opcao invalida!"));
    }

    #[test]
    fn test_input_closed_ends_with_error() {
        let mut s = session(&[6, 3]);
        let (result, output) = run(&mut s, "1\n1\n2\n1\n1\n");
        assert!(matches!(result, Err(ConquestError::InputClosed)));
        assert!(output.contains("FIM DE JOGO"));
        assert!(output.contains("Batalhas: 1 | Conquistas: 1"));
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_player_mistakes_stay_below_default_log_level() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(logs.clone())
            .finish();

        let mut s = session(&[]);
        let (result, _) = tracing::subscriber::with_default(subscriber, || {
            run(&mut s, "7\n1\n2\n2\n1\n1\n9\n0\n")
        });

        assert!(result.is_ok());
        assert!(logs.0.lock().unwrap().is_empty());
    }
}
