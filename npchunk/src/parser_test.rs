use crate::{chunks, english, np_chunks, parse};
use crate::{EarleyForest, EarleyParser, Error, Grammar, GrammarBuilder, Tree};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn words(sentence: &str) -> Vec<&str> {
    sentence.split_whitespace().collect()
}

fn grammar() -> Grammar {
    english::grammar().expect("Bad Grammar")
}

fn brackets(trees: &[Tree]) -> Vec<String> {
    trees.iter().map(|t| t.to_string()).collect()
}

fn check_trees(trees: &[Tree], expected: Vec<&str>) {
    assert_eq!(trees.len(), expected.len());
    let mut expect: HashSet<&str> = expected.into_iter().collect();
    for t in trees {
        let teststr = t.to_string();
        assert!(expect.remove(teststr.as_str()), "unexpected tree {}", teststr);
    }
    assert_eq!(0, expect.len());
}

fn spans(found: Vec<&Tree>) -> Vec<String> {
    found.iter().map(|t| t.leaves().join(" ")).collect()
}

///////////////////////////////////////////////////////////////////////////////

#[test]
fn holmes_sat_in_the_armchair() {
    let g = grammar();
    let trees = parse(&g, &words("holmes sat in the armchair")).unwrap();
    assert_eq!(brackets(&trees), vec![
        "(S (NP (N holmes)) (VP (V sat) (PP (P in) (NP (Det the) (N armchair)))))"]);
    assert_eq!(spans(np_chunks(&trees[0])), vec!["holmes", "the armchair"]);
}

#[test]
fn single_word_phrases() {
    let g = grammar();
    let trees = parse(&g, &words("holmes sat")).unwrap();
    assert_eq!(brackets(&trees), vec!["(S (NP (N holmes)) (VP (V sat)))"]);
    let trees = parse(&g, &words("she never said a word")).unwrap();
    assert_eq!(brackets(&trees), vec![
        "(S (NP (N she)) (VP (Adv never) (VP (V said) (NP (Det a) (N word)))))"]);
}

#[test]
fn adjective_recursion() {
    let g = grammar();
    let trees = parse(&g, &words("holmes sat in the little red armchair")).unwrap();
    assert_eq!(brackets(&trees), vec![
        "(S (NP (N holmes)) (VP (V sat) (PP (P in) (NP (Det the) \
         (AdjP (Adj little) (AdjP (Adj red))) (N armchair)))))"]);
    assert_eq!(spans(np_chunks(&trees[0])), vec!["holmes", "the little red armchair"]);
}

#[test]
fn attachment_ambiguity() {
    let g = grammar();
    let trees = parse(&g, &words("we arrived the day before thursday")).unwrap();
    check_trees(&trees, vec![
        "(S (NP (N we)) (VP (V arrived) (NP (NP (Det the) (N day)) (PP (P before) (NP (N thursday))))))",
        "(S (NP (N we)) (VP (V arrived) (NP (Det the) (N day)) (PP (P before) (NP (N thursday)))))",
    ]);
    // both readings chunk the same way
    for t in &trees {
        assert_eq!(spans(np_chunks(t)), vec!["we", "the day", "thursday"]);
    }
}

#[test]
fn two_prepositional_phrases() {
    let g = grammar();
    let sentence = words("holmes lit a pipe in the armchair in the home");
    let trees = parse(&g, &sentence).unwrap();
    assert!(trees.len() > 1);
    let distinct: HashSet<_> = trees.iter().collect();
    assert_eq!(distinct.len(), trees.len());
    for t in &trees {
        assert_eq!(t.leaves(), sentence);
        assert_eq!(spans(np_chunks(t)),
                   vec!["holmes", "a pipe", "the armchair", "the home"]);
    }
}

#[test]
fn adverbs_both_sides() {
    let g = grammar();
    // VP -> Adv VP | VP Adv can wrap "sat" either way
    let trees = parse(&g, &words("holmes never sat here")).unwrap();
    check_trees(&trees, vec![
        "(S (NP (N holmes)) (VP (Adv never) (VP (VP (V sat)) (Adv here))))",
        "(S (NP (N holmes)) (VP (VP (Adv never) (VP (V sat))) (Adv here)))",
    ]);
}

#[test]
fn unknown_token() {
    let g = grammar();
    let err = parse(&g, &words("holmes xyzzy")).unwrap_err();
    assert_eq!(err, Error::UnparsableToken(vec!["xyzzy".to_string()]));
    // all unknown words are reported once, in order
    let err = parse(&g, &words("plugh holmes xyzzy plugh")).unwrap_err();
    assert_eq!(err, Error::UnparsableToken(vec!["plugh".to_string(), "xyzzy".to_string()]));
    // tokens aren't normalized by the parser
    assert!(parse(&g, &words("Holmes sat")).is_err());
}

#[test]
fn no_parse() {
    let g = grammar();
    assert_eq!(parse(&g, &words("the the")).unwrap(), vec![]);
    assert_eq!(parse(&g, &words("holmes sat and he chuckled")).unwrap(), vec![]);
    assert_eq!(parse(&g, &words("sat holmes")).unwrap(), vec![]);
    assert_eq!(parse::<&str>(&g, &[]).unwrap(), vec![]);
}

#[test]
fn deterministic() {
    let g = grammar();
    let sentence = words("holmes lit a pipe in the armchair in the home");
    let first = brackets(&parse(&g, &sentence).unwrap());
    for _ in 0..5 {
        assert_eq!(brackets(&parse(&g, &sentence).unwrap()), first);
    }
}

#[test]
fn trees_are_independent() {
    let g = grammar();
    let mut trees = parse(&g, &words("we arrived the day before thursday")).unwrap();
    let before = trees[1].clone();
    if let Tree::Node(_, children) = &mut trees[0] {
        children.clear();
    }
    assert_eq!(trees[1], before);
}

#[test]
fn chunk_invariants() {
    let g = grammar();
    let sentences = [
        "holmes sat in the armchair",
        "my companion smiled an enigmatical smile",
        "holmes lit a pipe in the armchair in the home",
        "she never said a word until we were at the door here",
        "i had a country walk on thursday and came home in a dreadful mess",
        "we arrived the day before thursday",
    ];
    for sentence in sentences {
        let tokens = words(sentence);
        for tree in parse(&g, &tokens).unwrap() {
            assert_eq!(tree.leaves(), tokens);
            let found = np_chunks(&tree);
            for c in &found {
                assert_eq!(c.label(), Some("NP"));
                assert!(c.subtrees().iter().skip(1).all(|d| d.label() != Some("NP")));
                for other in &found {
                    if std::ptr::eq(*c, *other) { continue; }
                    assert!(!c.subtrees().iter().any(|d| std::ptr::eq(*d, *other)));
                }
            }
        }
    }
}

#[test]
fn parser_and_forest() {
    let g = grammar();
    let parser = EarleyParser::new(&g);
    let roots = parser.parse(&words("we arrived the day before thursday")).unwrap();
    // a single complete S item, ambiguity lives in its back-pointers
    assert_eq!(roots.0.len(), 1);
    let trees = EarleyForest::default().trees(&roots);
    assert_eq!(trees.len(), 2);
    let roots = parser.parse(&words("the the")).unwrap();
    assert!(roots.0.is_empty());
    assert!(EarleyForest::default().trees(&roots).is_empty());
}

#[test]
fn grammar_ambiguous() {
    // S -> S S | b
    let g = GrammarBuilder::default()
      .nonterm("S")
      .terminal("b")
      .rule("S", &["S", "S"])
      .rule("S", &["b"])
      .into_grammar("S")
      .expect("Bad grammar");
    // Earley's corner case that can generate spurious trees for bbb
    let trees = parse(&g, &words("b b b")).unwrap();
    check_trees(&trees, vec![
        "(S (S (S b) (S b)) (S b))",
        "(S (S b) (S (S b) (S b)))",
    ]);
    // catalan numbers
    assert_eq!(parse(&g, &words("b b b b")).unwrap().len(), 5);
    assert_eq!(parse(&g, &words("b b b b b b")).unwrap().len(), 42);
}

#[test]
fn right_recursion_and_units() {
    // L -> I | I L ; I -> X ; X -> "x"
    let g: Grammar = "L -> I | I L\nI -> X\nX -> 'x'".parse().unwrap();
    let trees = parse(&g, &words("x x x")).unwrap();
    assert_eq!(brackets(&trees), vec![
        "(L (I (X x)) (L (I (X x)) (L (I (X x)))))"]);
}

#[test]
fn left_recursion() {
    // Sum -> Sum "+" Num | Num ; Num -> "1" | "2" | "3"
    let g: Grammar = r#"
        Sum -> Sum "+" Num | Num
        Num -> "1" | "2" | "3"
    "#.parse().unwrap();
    let trees = parse(&g, &words("1 + 2 + 3")).unwrap();
    assert_eq!(brackets(&trees), vec![
        "(Sum (Sum (Sum (Num 1)) + (Num 2)) + (Num 3))"]);
    assert_eq!(parse(&g, &words("1 + + 3")).unwrap(), vec![]);
}

#[test]
fn custom_chunk_label() {
    let g = grammar();
    let trees = parse(&g, &words("holmes sat in the armchair")).unwrap();
    assert_eq!(spans(chunks(&trees[0], "PP")), vec!["in the armchair"]);
    assert_eq!(spans(chunks(&trees[0], "VP")), vec!["sat in the armchair"]);
}

#[test]
fn shared_across_threads() {
    let g = grammar();
    let sentences = [
        "holmes sat in the armchair",
        "we arrived the day before thursday",
        "holmes lit a pipe in the armchair in the home",
        "she smiled",
    ];
    let expected: Vec<_> = sentences.iter()
        .map(|s| brackets(&parse(&g, &words(s)).unwrap()))
        .collect();
    let shared = &g;
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = sentences.iter()
            .map(|s| scope.spawn(move || brackets(&parse(shared, &words(s)).unwrap())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, expected);
}

#[test]
fn forest_reuse() {
    let g = grammar();
    let parser = EarleyParser::new(&g);
    let mut forest = EarleyForest::default();
    let first = forest.trees(&parser.parse(&words("holmes sat in the armchair")).unwrap());
    let second = forest.trees(&parser.parse(&words("holmes sat in the home")).unwrap());
    assert_eq!(first[0].leaves(), words("holmes sat in the armchair"));
    assert_eq!(second[0].leaves(), words("holmes sat in the home"));
}
