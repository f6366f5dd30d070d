use std::sync::{Arc, Mutex};

use crate::error::{Error, Stage};
use crate::interceptor::{InterceptorChain, InterceptorId};

fn marker_chain(count: usize) -> (InterceptorChain<Vec<usize>>, Vec<InterceptorId>) {
    let mut chain = InterceptorChain::new(Stage::Request);
    let ids = (0..count)
        .map(|marker| {
            chain.register_sync(move |mut seen: Vec<usize>| {
                seen.push(marker);
                Ok(seen)
            })
        })
        .collect();
    (chain, ids)
}

#[tokio::test]
async fn runs_handlers_in_registration_order() {
    for count in [0, 1, 2, 7] {
        let (chain, ids) = marker_chain(count);

        let seen = chain.run(Vec::new()).await.unwrap();

        assert_eq!(seen, (0..count).collect::<Vec<_>>());
        assert_eq!(
            ids.iter().map(|id| id.index()).collect::<Vec<_>>(),
            (0..count).collect::<Vec<_>>()
        );
    }
}

#[tokio::test]
async fn ejected_handler_keeps_its_slot() {
    let (mut chain, ids) = marker_chain(4);

    assert!(chain.eject(ids[1]));
    let seen = chain.run(Vec::new()).await.unwrap();

    assert_eq!(seen, vec![0, 2, 3]);
    assert_eq!(chain.len(), 4);

    // ids handed out before the eject still address the same handlers
    assert!(chain.eject(ids[3]));
    let next = chain.register_sync(|mut seen: Vec<usize>| {
        seen.push(99);
        Ok(seen)
    });
    assert_eq!(next.index(), 4);
    assert_eq!(chain.run(Vec::new()).await.unwrap(), vec![0, 2, 99]);
}

#[tokio::test]
async fn eject_out_of_range_is_a_noop() {
    let (mut chain, _) = marker_chain(2);
    let (_, foreign) = marker_chain(5);

    assert!(!chain.eject(foreign[4]));
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.run(Vec::new()).await.unwrap(), vec![0, 1]);
}

#[tokio::test]
async fn async_handlers_run_one_after_another() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut chain: InterceptorChain<Vec<String>> = InterceptorChain::new(Stage::Request);

    let first_log = log.clone();
    chain.register(move |mut headers: Vec<String>| {
        let log = first_log.clone();
        async move {
            tokio::task::yield_now().await;
            headers.push("authorization".to_string());
            log.lock().unwrap().push("auth");
            Ok::<_, anyhow::Error>(headers)
        }
    });
    let second_log = log.clone();
    chain.register(move |headers: Vec<String>| {
        let log = second_log.clone();
        async move {
            assert!(headers.contains(&"authorization".to_string()));
            log.lock().unwrap().push("logging");
            Ok::<_, anyhow::Error>(headers)
        }
    });

    let headers = chain.run(Vec::new()).await.unwrap();

    assert_eq!(headers, vec!["authorization".to_string()]);
    assert_eq!(*log.lock().unwrap(), vec!["auth", "logging"]);
}

#[tokio::test]
async fn failing_handler_halts_the_chain() {
    let ran_after = Arc::new(Mutex::new(false));
    let mut chain: InterceptorChain<u32> = InterceptorChain::new(Stage::Response);

    chain.register_sync(|value| Ok(value + 1));
    chain.register_sync(|_| Err(anyhow::anyhow!("rejected")));
    let flag = ran_after.clone();
    chain.register_sync(move |value| {
        *flag.lock().unwrap() = true;
        Ok(value)
    });

    let err = chain.run(1).await.unwrap_err();

    match err {
        Error::Interceptor {
            stage,
            index,
            source,
        } => {
            assert_eq!(stage, Stage::Response);
            assert_eq!(index, 1);
            assert_eq!(source.to_string(), "rejected");
        }
        other => panic!("expected an interceptor error, got {:?}", other),
    }
    assert!(!*ran_after.lock().unwrap());
}

#[tokio::test]
async fn empty_chain_returns_input() {
    let chain: InterceptorChain<&'static str> = InterceptorChain::new(Stage::Request);

    assert!(chain.is_empty());
    assert_eq!(chain.run("untouched").await.unwrap(), "untouched");
}
