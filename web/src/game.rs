use crate::utils::*;
use clap::Args;
use hilo_core as game;
use web_sys::HtmlInputElement;
use yew::prelude::*;

impl StorageKey for game::Difficulty {
    const KEY: &'static str = "hilo:difficulty";
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::GuessOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::GuessOutcome| outcome.has_update())
    }
}

fn state_class(state: game::SessionState) -> &'static str {
    use game::SessionState::*;
    match state {
        Playing => "playing",
        Won => "win",
        Lost => "lose",
    }
}

fn verdict_class(verdict: game::Verdict) -> &'static str {
    use game::Verdict::*;
    match verdict {
        Low => "low",
        High => "high",
        Correct => "correct",
    }
}

fn feedback_class(feedback: game::Feedback) -> &'static str {
    use game::Feedback::*;
    match feedback {
        TooHigh { .. } => "high",
        TooLow { .. } => "low",
        Won { .. } => "win",
        Lost { .. } => "lose",
    }
}

fn attempts_summary(session: &game::GameSession) -> String {
    format!(
        "{}/{} attempts used ({} remaining)",
        session.attempts_used(),
        session.max_attempts(),
        session.attempts_remaining()
    )
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Input(String),
    Submit,
    SelectDifficulty(game::Difficulty),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct DifficultyButtonProps {
    difficulty: game::Difficulty,
    #[prop_or_default]
    selected: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::Difficulty>,
}

#[function_component(DifficultyButton)]
fn difficulty_button(props: &DifficultyButtonProps) -> Html {
    let DifficultyButtonProps {
        difficulty,
        selected,
        locked,
        callback,
    } = props.clone();

    let class = classes!(difficulty.key(), selected.then_some("selected"));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("difficulty click: {}", difficulty);
        callback.emit(difficulty);
    });

    html! {
        <button {class} {onclick} disabled={locked}>{difficulty.label()}</button>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct GuessBadgeProps {
    record: game::GuessRecord,
}

#[function_component(GuessBadge)]
fn guess_badge(props: &GuessBadgeProps) -> Html {
    let game::GuessRecord { value, verdict } = props.record;
    html! {
        <li class={classes!("badge", verdict_class(verdict))}>{value.to_string()}</li>
    }
}

#[derive(Args, Properties, Debug, Default, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed for the first secret instead of random
    #[arg(short, long)]
    #[prop_or_default]
    seed: Option<u64>,

    /// Start on this difficulty (easy, medium, hard) instead of the saved one
    #[arg(short, long)]
    #[prop_or_default]
    difficulty: Option<game::Difficulty>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
}

impl GameView {
    fn submit(&mut self) -> bool {
        if self.session.is_finished() {
            log::debug!("game finished, ignoring submit");
            return false;
        }

        let outcome = self.session.submit_input();
        log::debug!("guess outcome: {:?}", outcome);
        outcome.has_update()
    }

    fn select_difficulty(&mut self, difficulty: game::Difficulty) -> bool {
        let updated = self.session.set_difficulty(difficulty);
        if updated {
            difficulty.local_save();
        }
        updated
    }

    fn new_game(&mut self) -> bool {
        self.session
            .restart(game::RandomSecretGenerator::new(js_random_seed()));
        true
    }

    fn view_input(&self, ctx: &Context<Self>) -> Html {
        let error = self.session.pending_error();
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Input(input.value())
        });
        let onkeydown = ctx
            .link()
            .batch_callback(|e: KeyboardEvent| (e.key() == "Enter").then_some(Msg::Submit));
        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Submit);

        html! {
            <div class="guess">
                <input
                    type="text"
                    class={classes!(error.is_some().then_some("invalid"))}
                    value={self.session.input().to_string()}
                    placeholder="Enter your guess"
                    autofocus={true}
                    {oninput}
                    {onkeydown}
                />
                if let Some(error) = error {
                    <p class="error">{error.to_string()}</p>
                }
                <button type="button" {onclick}>{"Guess"}</button>
            </div>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, difficulty } = ctx.props().clone();
        let difficulty = difficulty.unwrap_or_else(LocalOrDefault::local_or_default);
        let seed = seed.unwrap_or_else(js_random_seed);

        Self {
            session: game::GameSession::new(
                difficulty,
                game::RandomSecretGenerator::new(seed),
            ),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Input(value) => {
                log::trace!("input: {:?}", value);
                self.session.on_input_change(value);
                true
            }
            Submit => self.submit(),
            SelectDifficulty(difficulty) => self.select_difficulty(difficulty),
            NewGame => {
                log::debug!("new game");
                self.new_game()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let session = &self.session;
        let started = session.is_started();
        let cb_difficulty = ctx.link().callback(SelectDifficulty);
        let cb_new_game = ctx.link().callback(|_: MouseEvent| NewGame);

        html! {
            <div class={classes!("hilo", state_class(session.state()))}>
                <header>
                    <h1>{"Number Guessing Game"}</h1>
                    <p>{"Guess a number between 1 and 100"}</p>
                </header>
                <nav>
                    {
                        for game::Difficulty::ALL.into_iter().map(|difficulty| html! {
                            <DifficultyButton
                                {difficulty}
                                selected={difficulty == session.difficulty()}
                                locked={started}
                                callback={cb_difficulty.clone()}
                            />
                        })
                    }
                </nav>
                <p class="attempts">{attempts_summary(session)}</p>
                if !session.is_finished() {
                    { self.view_input(ctx) }
                }
                if let Some(feedback) = session.feedback() {
                    <p class={classes!("feedback", feedback_class(feedback))}>
                        {feedback.to_string()}
                    </p>
                }
                if !session.history().is_empty() {
                    <ul class="history">
                        { for session.history().iter().map(|&record| html! { <GuessBadge {record}/> }) }
                    </ul>
                }
                <button class="new-game" onclick={cb_new_game}>{"New Game"}</button>
            </div>
        }
    }
}
