use slidebuf::SlideRb;
use std::{sync::Arc, thread, time::Duration};

const ROUNDS: i32 = 20;

fn main() {
    let rb = Arc::new(SlideRb::<i32>::new(15));

    let pjh = thread::spawn({
        let rb = rb.clone();
        move || {
            for i in 0..ROUNDS {
                rb.push(i);
                println!("-> producer 0 pushed {}", i);
                thread::sleep(Duration::from_millis(100));
            }
        }
    });

    for _ in 0..ROUNDS {
        println!("   size is {}", rb.len());
        println!("<- consumer popped {}", rb.pop());
    }
    pjh.join().unwrap();

    // Heap-owned payloads transfer ownership through the buffer the same way.
    let rb = Arc::new(SlideRb::<Box<i32>>::new(15));

    let pjh = thread::spawn({
        let rb = rb.clone();
        move || {
            for i in 0..ROUNDS {
                rb.push(Box::new(i));
                println!("-> producer 1 pushed {}", i);
                thread::sleep(Duration::from_millis(100));
            }
        }
    });

    for _ in 0..ROUNDS {
        println!("   size is {}", rb.len());
        println!("<- consumer popped {}", *rb.pop());
    }
    pjh.join().unwrap();
}
