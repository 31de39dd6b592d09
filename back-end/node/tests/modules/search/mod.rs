mod aggregator;
