use treescore::{EvalConfig, ParseEval, TableOptions, parse_trees};

const GOLD: &str = "(S (EDITED (NP (EX there)) (, ,))
     (NP (EX there))
     (VP (BES 's) (NP (DT no) (NN way))) (. .))
  (S (CC and) (, ,) (INTJ (UH uh))
     (PRN (, ,)
          (S (NP (PRP you)) (VP (VBP know))) (, ,))
     (NP (DT all)))";

const PARSE: &str = "(S (NP (EX there))
     (, ,)
     (NP (EX there))
     (VP (BES 's) (NP (DT no) (NN way))) (. .))
  (S1 (CC and) (, ,) (INTJ (UH uh)) (, ,)
     (PRN (S (NP (PRP you)) (VP (VBP know))))
     (, ,)
     (NP (DT all)))";

fn main() {
    let parse = parse_trees(PARSE).expect("predicted trees");
    let gold = parse_trees(GOLD).expect("gold trees");

    let mut eval = ParseEval::new(EvalConfig {
        word_coverage: true,
        ..EvalConfig::default()
    });
    eval.batch_update(&parse, &gold).expect("matched corpora");

    println!("{}", eval.table(&TableOptions::default()));
    println!("{}", eval.summary(None, false).unwrap());
    println!("{}", eval.summary(Some(&["EDITED", "PRN", "UH"]), false).unwrap());
    println!("{}", eval.summary(Some(&["EDITED", "PRN", "UH"]), true).unwrap());
}
